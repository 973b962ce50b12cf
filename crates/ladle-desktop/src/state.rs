//! Application state management
//!
//! Global state accessible via Dioxus context providers. The session store
//! and modal store are process-wide singletons; event handlers mutate them
//! directly and the single-threaded event loop serializes every mutation.

use std::sync::Arc;

use dioxus::prelude::*;

use ladle_core::api::ApiClient;
use ladle_core::modal::{ConfirmModal, ModalKind, ModalStore};
use ladle_core::session::{SessionState, SessionStore};

use crate::services::KeyringTokenStore;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Snapshot of the current session, re-read by views
    pub session: Signal<SessionState>,
    /// Centralized modal flags and payloads
    pub modals: Signal<ModalStore>,
    /// API gateway client, available once bootstrap finished
    pub api: Signal<Option<Arc<ApiClient>>>,
    /// Session store behind the snapshot; `None` until bootstrap
    pub session_store: Signal<Option<SessionStore<KeyringTokenStore>>>,
}

impl AppState {
    #[must_use]
    pub fn api_client(&self) -> Option<Arc<ApiClient>> {
        self.api.read().clone()
    }

    /// Per-call-site error policy: surface the failure as a reject modal.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.modals.write().reject_message(message);
    }

    /// Mutate the session store and refresh the published snapshot.
    pub fn with_session_store(
        &mut self,
        mutate: impl FnOnce(&mut SessionStore<KeyringTokenStore>) -> ladle_core::Result<()>,
    ) {
        let result = {
            let mut guard = self.session_store.write();
            guard.as_mut().map(mutate)
        };
        if let Some(Err(error)) = result {
            tracing::error!("Session store update failed: {}", error);
            self.reject(error.user_message());
        }
        let snapshot = self
            .session_store
            .read()
            .as_ref()
            .map_or_else(SessionState::default, |store| store.state());
        self.session.set(snapshot);
    }

    /// Purge the session and offer to sign back in.
    pub fn force_logout(&mut self) {
        self.with_session_store(|store| store.logout());

        let app = *self;
        self.modals.write().set_confirm(ConfirmModal {
            message: "You have been signed out.\nSign in again?".to_string(),
            on_confirm: Arc::new(move || {
                let mut app = app;
                app.modals.write().open(ModalKind::Login);
            }),
            on_cancel: None,
        });
    }
}
