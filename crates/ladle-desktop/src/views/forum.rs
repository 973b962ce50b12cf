//! Forum board: category tabs, post list, and the new-post composer.

use std::sync::Arc;

use dioxus::prelude::*;

use ladle_core::modal::{
    ConfirmModal, CursorModal, LoadingModal, ModalKind, SubmitData, SubmitModal,
};
use ladle_core::models::{ForumCategory, ForumPost, NewForumPost};

use crate::app::Route;
use crate::state::AppState;

#[component]
pub fn ForumPage() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();
    let mut categories = use_signal(Vec::<ForumCategory>::new);
    let mut selected = use_signal(|| None::<i64>);
    let mut posts = use_signal(Vec::<ForumPost>::new);
    let mut page = use_signal(|| 0u32);
    let mut refresh = use_signal(|| 0u64);
    let mut composing = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);

    use_effect(move || {
        let client = state.api.read().clone();
        spawn(async move {
            let Some(client) = client else { return };
            match client.forum_categories().await {
                Ok(rows) => {
                    if selected.read().is_none() {
                        selected.set(rows.first().map(|category| category.id));
                    }
                    categories.set(rows);
                }
                Err(error) => {
                    tracing::warn!("Category fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    });

    use_effect(move || {
        let Some(category_id) = selected() else { return };
        let current_page = page();
        let _version = refresh();
        let client = state.api.read().clone();
        spawn(async move {
            let Some(client) = client else { return };
            match client.forum_posts(category_id, current_page).await {
                Ok(rows) => posts.set(rows),
                Err(error) => {
                    tracing::warn!("Forum page fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    });

    let create = move |_| {
        let Some(category_id) = selected() else { return };
        let draft = NewForumPost {
            category_id,
            title: title().trim().to_string(),
            content: body().trim().to_string(),
        };
        if draft.title.is_empty() || draft.content.is_empty() {
            state.reject("A title and a body are required.");
            return;
        }
        state.modals.write().set_loading(LoadingModal {
            message: "Posting...".to_string(),
        });
        spawn(async move {
            let Some(client) = state.api_client() else {
                state.modals.write().close(ModalKind::Loading);
                return;
            };
            let outcome = client.create_forum_post(&draft).await;
            state.modals.write().close(ModalKind::Loading);
            match outcome {
                Ok(post) => {
                    composing.set(false);
                    title.set(String::new());
                    body.set(String::new());
                    nav.push(Route::ForumPostPage { id: post.id });
                }
                Err(error) => {
                    tracing::warn!("Post creation failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    };

    let signed_in = state.session.read().is_authenticated();
    let tabs = categories();
    let current_selected = selected();
    let page_display = page() + 1;

    rsx! {
        div {
            h1 { "Forum" }
            div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                for category in tabs {
                    CategoryTab { key: "{category.id}", category, selected, page }
                }
                div { style: "flex: 1;" }
                if signed_in {
                    button {
                        onclick: move |_| composing.set(!composing()),
                        if composing() { "Discard" } else { "New post" }
                    }
                }
            }

            if composing() {
                div { style: "border: 1px solid #eee; border-radius: 10px; padding: 12px; margin-bottom: 16px; background: #fff;",
                    input {
                        style: "display: block; width: 100%; margin-bottom: 8px; padding: 8px;",
                        placeholder: "Title",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                    textarea {
                        style: "display: block; width: 100%; min-height: 120px; margin-bottom: 8px; padding: 8px;",
                        placeholder: "Write your post",
                        value: "{body}",
                        oninput: move |evt| body.set(evt.value()),
                    }
                    button { onclick: create, "Publish" }
                }
            }

            if current_selected.is_none() {
                p { style: "color: #aaa;", "No categories yet." }
            }
            for post in posts() {
                PostRow { key: "{post.id}", post, refresh }
            }

            div { style: "display: flex; gap: 8px; margin-top: 16px;",
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
                button { onclick: move |_| page.set(page() + 1), "Next" }
            }
        }
    }
}

#[component]
fn CategoryTab(category: ForumCategory, selected: Signal<Option<i64>>, page: Signal<u32>) -> Element {
    let mut selected = selected;
    let mut page = page;
    let active = *selected.read() == Some(category.id);
    let id = category.id;

    rsx! {
        button {
            style: if active {
                "font-weight: 700; border-bottom: 2px solid #e07a3f;"
            } else {
                ""
            },
            onclick: move |_| {
                selected.set(Some(id));
                page.set(0);
            },
            "{category.title}"
        }
    }
}

#[component]
fn PostRow(post: ForumPost, refresh: Signal<u64>) -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let post_id = post.id;
    let post_title = post.title.clone();
    let post_content = post.content.clone();
    let author_id = post.member_id;

    let open_menu = move |evt: MouseEvent| {
        let session = state.session.read();
        let can_edit = session.is_admin() || session.member_id() == Some(author_id);
        drop(session);

        let mut options = vec!["Open".to_string()];
        if can_edit {
            options.push("Edit".to_string());
            options.push("Delete".to_string());
        }

        let coords = evt.client_coordinates();
        let menu_title = post_title.clone();
        let content = post_content.clone();
        state.modals.write().set_cursor(CursorModal {
            message: menu_title,
            options,
            position: Some((coords.x, coords.y)),
            id: post_id.to_string(),
            on_option: Arc::new(move |option, _id| match option {
                "Open" => {
                    nav.push(Route::ForumPostPage { id: post_id });
                }
                "Edit" => edit_post(state, refresh, post_id, content.clone()),
                "Delete" => delete_post(state, refresh, post_id),
                _ => {}
            }),
            on_cancel: None,
        });
    };

    rsx! {
        div { style: "display: flex; align-items: center; gap: 12px; border-top: 1px solid #eee; padding: 10px 0;",
            Link {
                to: Route::ForumPostPage { id: post.id },
                style: "flex: 1; font-weight: 600; color: inherit; text-decoration: none;",
                "{post.title}"
            }
            span { style: "font-size: 12px; color: #888;", "{post.author_nickname}" }
            span { style: "font-size: 12px; color: #aaa;", "{post.view_count} views" }
            button { onclick: open_menu, "..." }
        }
    }
}

/// Edit flow shared by the list row menu and the detail page.
pub(crate) fn edit_post(mut state: AppState, refresh: Signal<u64>, post_id: i64, content: String) {
    state.modals.write().set_submit(SubmitModal {
        message: "Edit your post".to_string(),
        initial: SubmitData {
            content,
            id: post_id.to_string(),
        },
        restriction: Some(2000),
        on_submit: Arc::new(move |data: SubmitData| {
            let mut state = state;
            let mut refresh = refresh;
            spawn(async move {
                let Some(client) = state.api_client() else { return };
                match client.update_forum_post(post_id, &data.content).await {
                    Ok(true) => refresh += 1,
                    Ok(false) => state.reject("The post was not updated."),
                    Err(error) => {
                        tracing::warn!("Post update failed: {}", error);
                        state.reject(error.user_message());
                    }
                }
            });
        }),
        on_cancel: None,
    });
}

/// Delete flow shared by the list row menu and the detail page.
pub(crate) fn delete_post(mut state: AppState, refresh: Signal<u64>, post_id: i64) {
    state.modals.write().set_confirm(ConfirmModal {
        message: "Delete this post?".to_string(),
        on_confirm: Arc::new(move || {
            let mut state = state;
            let mut refresh = refresh;
            spawn(async move {
                let Some(client) = state.api_client() else { return };
                match client.delete_forum_post(post_id).await {
                    Ok(true) => refresh += 1,
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
}
