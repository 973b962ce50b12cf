//! Nested comment section.
//!
//! Renders the server-shaped tree for one post. Replies append a synthetic
//! node before the create call returns; a failed call shows a reject modal
//! but leaves the node in place until the next page fetch.

use dioxus::prelude::*;

use ladle_core::comments::{CommentThread, PAGE_SIZE};
use ladle_core::models::{CommentId, CommentNode, NewComment};

use crate::state::AppState;

#[component]
pub fn CommentSection(post_id: String) -> Element {
    let mut state = use_context::<AppState>();
    let mut thread = use_signal(CommentThread::new);
    let mut page = use_signal(|| 0u32);
    let mut draft = use_signal(String::new);
    let mut reply_target = use_signal(|| None::<CommentId>);
    let mut reply_draft = use_signal(String::new);

    let fetch_id = post_id.clone();
    use_effect(move || {
        let current_page = page();
        let client = state.api.read().clone();
        let post_id = fetch_id.clone();
        spawn(async move {
            let Some(client) = client else { return };
            match client.comments(&post_id, current_page).await {
                Ok(roots) => thread.write().replace_page(current_page, roots),
                Err(error) => {
                    tracing::warn!("Comment fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    });

    let submit_id = post_id.clone();
    let submit_root = move |_| {
        let content = draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        let Some(nickname) = nickname_or_prompt(&mut state) else {
            return;
        };
        thread.write().push_optimistic_root(nickname, content.clone());
        draft.set(String::new());
        let post_id = submit_id.clone();
        spawn(async move {
            let Some(client) = state.api_client() else { return };
            let outcome = client
                .create_comment(&post_id, &NewComment { content })
                .await;
            report_write_outcome(&mut state, outcome, "The comment was not saved.");
        });
    };

    let submit_reply = move |_| {
        let Some(parent_id) = reply_target() else { return };
        let content = reply_draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        let Some(nickname) = nickname_or_prompt(&mut state) else {
            return;
        };
        let appended = thread
            .write()
            .push_optimistic_reply(parent_id, nickname, content.clone());
        if appended.is_none() {
            // Parent scrolled off the current page; nothing to anchor to.
            reply_target.set(None);
            return;
        }
        reply_draft.set(String::new());
        reply_target.set(None);
        spawn(async move {
            let Some(client) = state.api_client() else { return };
            let outcome = client
                .create_reply(parent_id, &NewComment { content })
                .await;
            report_write_outcome(&mut state, outcome, "The reply was not saved.");
        });
    };

    let current = thread.read().clone();
    let page_display = page() + 1;

    rsx! {
        section { class: "comments", style: "margin-top: 24px;",
            h3 { "Comments" }
            div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                input {
                    style: "flex: 1; padding: 8px;",
                    placeholder: "Write a comment",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { onclick: submit_root, "Post" }
            }
            if current.comments.is_empty() {
                p { style: "color: #aaa;", "No comments yet." }
            }
            for comment in current.comments.clone() {
                CommentItem {
                    key: "{comment.comment_id}",
                    comment,
                    thread,
                    reply_target,
                    reply_draft,
                    on_reply: submit_reply,
                }
            }
            div { style: "display: flex; gap: 8px; margin-top: 12px;",
                button {
                    disabled: page() == 0,
                    onclick: move |_| {
                        let current = page();
                        if current > 0 {
                            page.set(current - 1);
                        }
                    },
                    "Previous"
                }
                span { style: "align-self: center;", "Page {page_display}" }
                button {
                    disabled: (current.comments.len() as u32) < PAGE_SIZE,
                    onclick: move |_| page.set(page() + 1),
                    "Next"
                }
            }
        }
    }
}

/// The signed-in nickname, or a login prompt when there is none.
fn nickname_or_prompt(state: &mut AppState) -> Option<String> {
    let nickname = state
        .session
        .read()
        .profile
        .as_ref()
        .map(|profile| profile.nickname.clone());
    if nickname.is_none() {
        state.reject("Sign in to write a comment.");
    }
    nickname
}

fn report_write_outcome(state: &mut AppState, outcome: ladle_core::Result<bool>, rejected: &str) {
    match outcome {
        Ok(true) => {}
        Ok(false) => state.reject(rejected),
        Err(error) => {
            tracing::warn!("Comment write failed: {}", error);
            state.reject(error.user_message());
        }
    }
}

#[component]
fn CommentItem(
    comment: CommentNode,
    thread: Signal<CommentThread>,
    reply_target: Signal<Option<CommentId>>,
    reply_draft: Signal<String>,
    on_reply: EventHandler<MouseEvent>,
) -> Element {
    let id = comment.comment_id;
    let reply_count = comment.replies.len();
    let expanded = thread.read().is_expanded(id);
    let replying = reply_target.read().is_some_and(|target| target == id);
    let mut thread = thread;
    let mut reply_target = reply_target;
    let mut reply_draft = reply_draft;

    rsx! {
        div { style: "border-top: 1px solid #f0f0f0; padding: 8px 0;",
            div { style: "display: flex; gap: 8px; align-items: baseline;",
                span { style: "font-weight: 600;", "{comment.nickname}" }
                span { "{comment.content}" }
            }
            div { style: "display: flex; gap: 12px; font-size: 12px;",
                if !comment.replies.is_empty() {
                    button {
                        onclick: move |_| thread.write().toggle_expanded(id),
                        if expanded {
                            "Hide replies ({reply_count})"
                        } else {
                            "Show replies ({reply_count})"
                        }
                    }
                }
                button {
                    onclick: move |_| {
                        reply_target.set(Some(id));
                        reply_draft.set(String::new());
                    },
                    "Reply"
                }
            }
            if replying {
                div { style: "display: flex; gap: 8px; margin: 8px 0 0 16px;",
                    input {
                        style: "flex: 1; padding: 6px;",
                        placeholder: "Write a reply",
                        value: "{reply_draft}",
                        oninput: move |evt| reply_draft.set(evt.value()),
                    }
                    button { onclick: move |evt| on_reply.call(evt), "Post" }
                    button { onclick: move |_| reply_target.set(None), "Cancel" }
                }
            }
            if expanded {
                div { style: "margin-left: 24px;",
                    for reply in comment.replies.clone() {
                        div {
                            key: "{reply.comment_id}",
                            style: "display: flex; gap: 8px; align-items: baseline; padding: 4px 0;",
                            span { style: "font-weight: 600;", "{reply.nickname}" }
                            span { "{reply.content}" }
                        }
                    }
                }
            }
        }
    }
}
