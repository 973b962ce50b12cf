//! Persistent navigation header

use std::sync::Arc;

use dioxus::prelude::*;

use ladle_core::modal::{ConfirmModal, ModalKind};

use crate::app::Route;
use crate::state::AppState;

#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let session = (state.session)();

    let on_login = move |_| {
        state.modals.write().open(ModalKind::Login);
    };

    let on_logout = move |_| {
        let inner = state;
        state.modals.write().set_confirm(ConfirmModal {
            message: "Sign out of Ladle?".to_string(),
            on_confirm: Arc::new(move || {
                let mut inner = inner;
                inner.force_logout();
            }),
            on_cancel: None,
        });
    };

    rsx! {
        header {
            class: "app-header",
            style: "display: flex; align-items: center; gap: 16px; padding: 12px 24px; background: #2b1d0e; color: #faf7f2;",

            Link {
                to: Route::Home {},
                style: "font-weight: 700; font-size: 18px; color: inherit; text-decoration: none;",
                "Ladle"
            }
            Link {
                to: Route::RecipeList { category: "cocktail".to_string() },
                style: "color: inherit;",
                "Cocktails"
            }
            Link {
                to: Route::RecipeList { category: "food".to_string() },
                style: "color: inherit;",
                "Food"
            }
            Link {
                to: Route::ForumPage {},
                style: "color: inherit;",
                "Forum"
            }

            div { style: "flex: 1;" }

            if let Some(member_id) = session.member_id() {
                Link {
                    to: Route::ProfilePage { id: member_id },
                    style: "color: inherit;",
                    "My page"
                }
            }
            if session.is_admin() {
                Link {
                    to: Route::AdminPage {},
                    style: "color: inherit;",
                    "Admin"
                }
            }

            if session.is_authenticated() {
                button {
                    class: "header-auth",
                    onclick: on_logout,
                    "Sign out"
                }
            } else {
                button {
                    class: "header-auth",
                    onclick: on_login,
                    "Sign in"
                }
            }
        }
    }
}
