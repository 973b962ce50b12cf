//! Data models for Ladle
//!
//! Wire DTOs mirror the backend's JSON payloads; the server is the source of
//! truth for all of them.

mod admin;
mod calendar;
mod comment;
mod forum;
mod recipe;
mod session;

pub use admin::{MemberRow, SignupPoint};
pub use calendar::{
    CalendarDraft, CalendarEntry, CalendarId, CalendarQuery, RecipeCategory,
};
pub use comment::{CommentId, CommentNode, NewComment};
pub use forum::{ForumCategory, ForumPost, ForumPostId, NewForumPost};
pub use recipe::{RecipeDetail, RecipeSummary, TopRatedRecipe};
pub use session::{AuthTokens, LoginRequest, LoginResponse, Profile, Role, SignupRequest};
