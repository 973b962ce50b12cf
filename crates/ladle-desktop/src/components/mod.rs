//! UI Components
//!
//! Reusable UI components for the desktop application.

mod calendar_modal;
mod comment_thread;
mod header;
mod mini_calendar;
mod modals;
mod recipe_card;

pub use calendar_modal::CalendarOverlay;
pub use comment_thread::CommentSection;
pub use header::Header;
pub use mini_calendar::MiniCalendar;
pub use modals::ModalHost;
pub use recipe_card::RecipeCard;
