//! ladle-core - Core library for Ladle
//!
//! This crate contains the shared models, client-side stores, and the API
//! gateway client used by the Ladle desktop application. The backend service
//! owns all persistence and authorization; everything here is client state.

pub mod api;
pub mod calendar;
pub mod comments;
pub mod config;
pub mod error;
pub mod modal;
pub mod models;
pub mod session;
pub mod util;

pub use error::{ApiError, Result};
pub use models::{AuthTokens, Profile, Role};
