//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use ladle_core::api::ApiClient;
use ladle_core::config::BootstrapConfig;
use ladle_core::modal::ModalStore;
use ladle_core::session::{SessionState, SessionStore};

use crate::components::{Header, ModalHost};
use crate::services::KeyringTokenStore;
use crate::state::AppState;
use crate::views::{
    AdminPage, ForumPage, ForumPostPage, Home, ProfilePage, RecipeDetailPage, RecipeList,
};

/// Route table. A layout wraps every page with the persistent chrome
/// (header and modal host).
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/recipes/:category")]
    RecipeList { category: String },
    #[route("/recipes/:category/:id")]
    RecipeDetailPage { category: String, id: String },
    #[route("/forum")]
    ForumPage {},
    #[route("/forum/:id")]
    ForumPostPage { id: i64 },
    #[route("/profile/:id")]
    ProfilePage { id: i64 },
    #[route("/admin")]
    AdminPage {},
}

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let mut session = use_signal(SessionState::default);
    let modals = use_signal(ModalStore::default);
    let mut api: Signal<Option<Arc<ApiClient>>> = use_signal(|| None);
    let mut session_store: Signal<Option<SessionStore<KeyringTokenStore>>> = use_signal(|| None);
    let mut bootstrapped = use_signal(|| false);

    // Session bootstrap (only once per application lifetime; a fresh login
    // re-runs the identity fetch through the login flow itself).
    use_effect(move || {
        if bootstrapped() {
            return;
        }
        bootstrapped.set(true); // Mark immediately to prevent double init

        spawn(async move {
            let config = BootstrapConfig::from_env().unwrap_or_else(|error| {
                tracing::error!("Invalid bootstrap configuration: {}", error);
                BootstrapConfig::default()
            });

            let mut store = SessionStore::new(KeyringTokenStore::default());
            let has_tokens = store.restore().unwrap_or_else(|error| {
                tracing::warn!("Could not read persisted tokens: {}", error);
                false
            });

            let client = match ApiClient::new(&config, store.token_handle()) {
                Ok(client) => Arc::new(client),
                Err(error) => {
                    tracing::error!("Failed to build API client: {}", error);
                    return;
                }
            };

            if has_tokens {
                // Single "who am I" attempt; failure purges the tokens and
                // falls back to guest.
                let outcome = client.my_info().await;
                if let Err(error) = store.apply_identity(outcome) {
                    tracing::warn!("Session purge failed: {}", error);
                }
            } else {
                store.set_guest();
            }

            tracing::info!(
                "Session bootstrap finished (authenticated: {})",
                store.state().is_authenticated()
            );

            session.set(store.state());
            api.set(Some(client));
            session_store.set(Some(store));
        });
    });

    use_context_provider(|| AppState {
        session,
        modals,
        api,
        session_store,
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent chrome around every routed page.
#[component]
fn Shell() -> Element {
    rsx! {
        div {
            class: "app-container",
            style: "min-height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: #faf7f2; color: #2b1d0e;",

            Header {}

            main {
                class: "main-content",
                style: "max-width: 960px; margin: 0 auto; padding: 24px;",
                Outlet::<Route> {}
            }

            ModalHost {}
        }
    }
}
