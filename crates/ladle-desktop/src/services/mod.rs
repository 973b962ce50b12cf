//! Application services
//!
//! Durable token storage backing the session store.

mod session_store;

pub use session_store::KeyringTokenStore;
