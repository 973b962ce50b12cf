//! Routed pages

mod admin;
mod forum;
mod forum_post;
mod home;
mod profile;
mod recipe_detail;
mod recipe_list;

pub use admin::AdminPage;
pub use forum::ForumPage;
pub use forum_post::ForumPostPage;
pub use home::Home;
pub use profile::ProfilePage;
pub use recipe_detail::RecipeDetailPage;
pub use recipe_list::RecipeList;
