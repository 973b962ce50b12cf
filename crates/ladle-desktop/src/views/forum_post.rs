//! Single forum post with its comment thread.

use std::sync::Arc;

use dioxus::prelude::*;

use ladle_core::modal::ConfirmModal;
use ladle_core::models::ForumPost;

use crate::app::Route;
use crate::components::CommentSection;
use crate::state::AppState;

use super::forum::edit_post;

#[component]
pub fn ForumPostPage(id: i64) -> Element {
    rsx! {
        PostBody { key: "{id}", id }
    }
}

#[component]
fn PostBody(id: i64) -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();
    let mut post = use_signal(|| None::<ForumPost>);
    let refresh = use_signal(|| 0u64);

    // Deleting from the detail page leaves nothing to refresh; go back to
    // the board instead.
    let delete = move |_| {
        state.modals.write().set_confirm(ConfirmModal {
            message: "Delete this post?".to_string(),
            on_confirm: Arc::new(move || {
                let mut state = state;
                spawn(async move {
                    let Some(client) = state.api_client() else { return };
                    match client.delete_forum_post(id).await {
                        Ok(true) => {
                            nav.push(Route::ForumPage {});
                        }
                        Ok(false) => state.reject("The post was not deleted."),
                        Err(error) => {
                            tracing::warn!("Post delete failed: {}", error);
                            state.reject(error.user_message());
                        }
                    }
                });
            }),
            on_cancel: None,
        });
    };

    use_effect(move || {
        let _version = refresh();
        let client = state.api.read().clone();
        spawn(async move {
            let Some(client) = client else { return };
            match client.forum_post(id).await {
                Ok(fetched) => post.set(Some(fetched)),
                Err(error) => {
                    tracing::warn!("Post fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    });

    let session = state.session.read();
    let member_id = session.member_id();
    let is_admin = session.is_admin();
    drop(session);

    let current = post();

    rsx! {
        div {
            if let Some(post) = current {
                div { style: "display: flex; align-items: baseline; gap: 12px;",
                    h1 { style: "margin: 0; flex: 1;", "{post.title}" }
                    if is_admin || member_id == Some(post.member_id) {
                        button {
                            onclick: {
                                let content = post.content.clone();
                                move |_| edit_post(state, refresh, id, content.clone())
                            },
                            "Edit"
                        }
                        button { onclick: delete, "Delete" }
                    }
                }
                p { style: "font-size: 13px; color: #888;",
                    "{post.author_nickname}, {post.created_at}, {post.view_count} views"
                }
                p { style: "white-space: pre-line;", "{post.content}" }
            } else {
                p { style: "color: #aaa;", "Loading post..." }
            }

            CommentSection { post_id: id.to_string() }
        }
    }
}
