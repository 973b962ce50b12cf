//! Modal dialogs
//!
//! `ModalHost` renders every open modal kind from the centralized store so
//! trigger sites never own a dialog element themselves. Dialogs re-read the
//! store on each render; a replaced payload simply re-renders with the
//! latest values (last-write-wins).

use std::sync::Arc;

use dioxus::prelude::*;

use ladle_core::modal::{Callback, ModalKind, SubmitData};
use ladle_core::models::{LoginRequest, SignupRequest};

use crate::state::AppState;

const BACKDROP_STYLE: &str = "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45); display: flex; align-items: center; justify-content: center; z-index: 100;";
const CARD_STYLE: &str = "background: #fff; border-radius: 10px; padding: 24px; min-width: 320px; max-width: 480px; box-shadow: 0 12px 40px rgba(0, 0, 0, 0.25);";
const MESSAGE_STYLE: &str = "white-space: pre-line; margin-bottom: 16px;";
const BUTTON_ROW_STYLE: &str = "display: flex; gap: 8px; justify-content: flex-end;";

/// Render site for every modal kind.
#[component]
pub fn ModalHost() -> Element {
    let state = use_context::<AppState>();
    let modals = (state.modals)();
    let submit_target = modals.submit().map(|payload| payload.initial.id.clone());

    rsx! {
        if modals.is_open(ModalKind::Login) {
            LoginDialog {}
        }
        if modals.is_open(ModalKind::Signup) {
            SignupDialog {}
        }
        if modals.is_open(ModalKind::Confirm) {
            ConfirmDialog {}
        }
        if modals.is_open(ModalKind::Reject) {
            RejectDialog {}
        }
        if modals.is_open(ModalKind::Option) {
            OptionDialog {}
        }
        if let Some(target) = submit_target {
            // Keyed on the target id so a replacement payload remounts the
            // dialog and re-seeds the editor from its initial content.
            SubmitDialog { key: "{target}" }
        }
        if modals.is_open(ModalKind::Cursor) {
            CursorDialog {}
        }
        if modals.is_open(ModalKind::TitleContent) {
            TitleContentDialog {}
        }
        if let Some(payload) = modals.calendar().cloned() {
            // Keyed on the date so picking another day remounts the overlay
            // and re-runs its week fetch.
            super::CalendarOverlay {
                key: "{payload.date}",
                date: payload.date,
                member_id: payload.member_id,
                message: payload.message,
            }
        }
        if modals.is_open(ModalKind::Loading) {
            LoadingDialog {}
        }
    }
}

fn run_and_close(mut state: AppState, kind: ModalKind, callback: Option<Callback>) {
    state.modals.write().close(kind);
    if let Some(callback) = callback {
        callback();
    }
}

#[component]
fn LoginDialog() -> Element {
    let mut state = use_context::<AppState>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if busy() {
            return;
        }
        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.trim().is_empty() {
            state.reject("Email and password are required.");
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = state.api_client() else {
                busy.set(false);
                return;
            };
            let request = LoginRequest {
                email: email_value,
                password: password_value,
            };
            match client.login(&request).await {
                Ok(response) => {
                    state.with_session_store(|store| store.set_tokens(response.token));
                    // Fresh token identity: run the single identity fetch.
                    let outcome = client.my_info().await;
                    state.with_session_store(|store| store.apply_identity(outcome));
                    state.modals.write().close(ModalKind::Login);
                }
                Err(error) => {
                    tracing::warn!("Login failed: {}", error);
                    state.reject(error.user_message());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "modal-backdrop", style: BACKDROP_STYLE,
            div { class: "modal-card", style: CARD_STYLE,
                h2 { "Sign in" }
                input {
                    style: "display: block; width: 100%; margin-bottom: 8px; padding: 8px;",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    style: "display: block; width: 100%; margin-bottom: 16px; padding: 8px;",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                div { style: BUTTON_ROW_STYLE,
                    button {
                        onclick: move |_| {
                            let mut modals = state.modals;
                            modals.write().close(ModalKind::Login);
                            modals.write().open(ModalKind::Signup);
                        },
                        "Create account"
                    }
                    button {
                        onclick: move |_| state.modals.write().close(ModalKind::Login),
                        "Cancel"
                    }
                    button { disabled: busy(), onclick: submit, "Sign in" }
                }
            }
        }
    }
}

#[component]
fn SignupDialog() -> Element {
    let mut state = use_context::<AppState>();
    let mut email = use_signal(String::new);
    let mut nickname = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if busy() {
            return;
        }
        let request = SignupRequest {
            email: email().trim().to_string(),
            password: password(),
            nickname: nickname().trim().to_string(),
        };
        if request.email.is_empty() || request.nickname.is_empty() || request.password.is_empty() {
            state.reject("Email, nickname and password are all required.");
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = state.api_client() else {
                busy.set(false);
                return;
            };
            match client.signup(&request).await {
                Ok(true) => {
                    let mut modals = state.modals;
                    modals.write().close(ModalKind::Signup);
                    modals.write().set_confirm(ladle_core::modal::ConfirmModal {
                        message: "Account created.\nSign in now?".to_string(),
                        on_confirm: Arc::new(move || {
                            let mut modals = modals;
                            modals.write().open(ModalKind::Login);
                        }),
                        on_cancel: None,
                    });
                }
                Ok(false) => state.reject("Signup was rejected. Please check your details."),
                Err(error) => {
                    tracing::warn!("Signup failed: {}", error);
                    state.reject(error.user_message());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "modal-backdrop", style: BACKDROP_STYLE,
            div { class: "modal-card", style: CARD_STYLE,
                h2 { "Create account" }
                input {
                    style: "display: block; width: 100%; margin-bottom: 8px; padding: 8px;",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    style: "display: block; width: 100%; margin-bottom: 8px; padding: 8px;",
                    placeholder: "Nickname",
                    value: "{nickname}",
                    oninput: move |evt| nickname.set(evt.value()),
                }
                input {
                    style: "display: block; width: 100%; margin-bottom: 16px; padding: 8px;",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                div { style: BUTTON_ROW_STYLE,
                    button {
                        onclick: move |_| state.modals.write().close(ModalKind::Signup),
                        "Cancel"
                    }
                    button { disabled: busy(), onclick: submit, "Create account" }
                }
            }
        }
    }
}

#[component]
fn ConfirmDialog() -> Element {
    let state = use_context::<AppState>();
    let Some(payload) = state.modals.read().confirm().cloned() else {
        return rsx! {};
    };

    let on_confirm = payload.on_confirm.clone();
    let on_cancel = payload.on_cancel.clone();

    rsx! {
        div { class: "modal-backdrop", style: BACKDROP_STYLE,
            div { class: "modal-card", style: CARD_STYLE,
                p { style: MESSAGE_STYLE, "{payload.message}" }
                div { style: BUTTON_ROW_STYLE,
                    button {
                        onclick: move |_| run_and_close(state, ModalKind::Confirm, on_cancel.clone()),
                        "Cancel"
                    }
                    button {
                        onclick: move |_| run_and_close(state, ModalKind::Confirm, Some(on_confirm.clone())),
                        "OK"
                    }
                }
            }
        }
    }
}

#[component]
fn RejectDialog() -> Element {
    let state = use_context::<AppState>();
    let Some(payload) = state.modals.read().reject().cloned() else {
        return rsx! {};
    };
    let on_cancel = payload.on_cancel.clone();

    rsx! {
        div { class: "modal-backdrop", style: BACKDROP_STYLE,
            div { class: "modal-card", style: CARD_STYLE,
                p { style: MESSAGE_STYLE, "{payload.message}" }
                div { style: BUTTON_ROW_STYLE,
                    button {
                        onclick: move |_| run_and_close(state, ModalKind::Reject, on_cancel.clone()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionDialog() -> Element {
    let state = use_context::<AppState>();
    let Some(payload) = state.modals.read().option().cloned() else {
        return rsx! {};
    };
    let on_cancel = payload.on_cancel.clone();

    rsx! {
        div { class: "modal-backdrop", style: BACKDROP_STYLE,
            div { class: "modal-card", style: CARD_STYLE,
                p { style: MESSAGE_STYLE, "{payload.message}" }
                div { style: "display: flex; flex-direction: column; gap: 8px; margin-bottom: 16px;",
                    for option in payload.options.clone() {
                        button {
                            onclick: {
                                let on_option = payload.on_option.clone();
                                let value = option.clone();
                                move |_| {
                                    let mut modals = state.modals;
                                    modals.write().close(ModalKind::Option);
                                    on_option(&value);
                                }
                            },
                            "{option}"
                        }
                    }
                }
                div { style: BUTTON_ROW_STYLE,
                    button {
                        onclick: move |_| run_and_close(state, ModalKind::Option, on_cancel.clone()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
fn SubmitDialog() -> Element {
    let state = use_context::<AppState>();
    let payload = state.modals.read().submit().cloned();
    // Hook order must not depend on the payload being present.
    let mut content = use_signal(|| {
        payload
            .as_ref()
            .map(|submit| submit.initial.content.clone())
            .unwrap_or_default()
    });
    let Some(payload) = payload else {
        return rsx! {};
    };
    let restriction = payload.restriction;
    let on_cancel = payload.on_cancel.clone();
    let on_submit = payload.on_submit.clone();
    let initial_id = payload.initial.id.clone();

    let used = content().chars().count();
    let over_limit = restriction.is_some_and(|limit| used > limit);

    rsx! {
        div { class: "modal-backdrop", style: BACKDROP_STYLE,
            div { class: "modal-card", style: CARD_STYLE,
                p { style: MESSAGE_STYLE, "{payload.message}" }
                textarea {
                    style: "width: 100%; min-height: 96px; margin-bottom: 8px; padding: 8px;",
                    value: "{content}",
                    oninput: move |evt| content.set(evt.value()),
                }
                if let Some(limit) = restriction {
                    p { style: "font-size: 12px; color: #888;", "{used}/{limit}" }
                }
                div { style: BUTTON_ROW_STYLE,
                    button {
                        onclick: move |_| run_and_close(state, ModalKind::Submit, on_cancel.clone()),
                        "Cancel"
                    }
                    button {
                        disabled: over_limit || content().trim().is_empty(),
                        onclick: move |_| {
                            let data = SubmitData {
                                content: content().trim().to_string(),
                                id: initial_id.clone(),
                            };
                            let mut modals = state.modals;
                            modals.write().close(ModalKind::Submit);
                            on_submit(data);
                        },
                        "Submit"
                    }
                }
            }
        }
    }
}

#[component]
fn CursorDialog() -> Element {
    let state = use_context::<AppState>();
    let Some(payload) = state.modals.read().cursor().cloned() else {
        return rsx! {};
    };

    let (left, top) = payload.position.unwrap_or((48.0, 48.0));
    let on_cancel = payload.on_cancel.clone();

    rsx! {
        // Transparent click-away layer; the menu anchors at the cursor.
        div {
            class: "cursor-backdrop",
            style: "position: fixed; inset: 0; z-index: 110;",
            onclick: move |_| run_and_close(state, ModalKind::Cursor, on_cancel.clone()),
        }
        div {
            class: "cursor-menu",
            style: "position: fixed; left: {left}px; top: {top}px; z-index: 111; background: #fff; border: 1px solid #ddd; border-radius: 6px; box-shadow: 0 6px 20px rgba(0, 0, 0, 0.2);",
            p { style: "padding: 8px 12px; margin: 0; font-weight: 600;", "{payload.message}" }
            for option in payload.options.clone() {
                button {
                    style: "display: block; width: 100%; text-align: left; padding: 8px 12px; border: none; background: none; cursor: pointer;",
                    onclick: {
                        let on_option = payload.on_option.clone();
                        let value = option.clone();
                        let id = payload.id.clone();
                        move |_| {
                            let mut modals = state.modals;
                            modals.write().close(ModalKind::Cursor);
                            on_option(&value, &id);
                        }
                    },
                    "{option}"
                }
            }
        }
    }
}

#[component]
fn TitleContentDialog() -> Element {
    let state = use_context::<AppState>();
    let Some(payload) = state.modals.read().title_content().cloned() else {
        return rsx! {};
    };

    rsx! {
        div { class: "modal-backdrop", style: BACKDROP_STYLE,
            div { class: "modal-card", style: CARD_STYLE,
                h2 { "{payload.title}" }
                p { style: MESSAGE_STYLE, "{payload.content}" }
                div { style: BUTTON_ROW_STYLE,
                    button {
                        onclick: move |_| run_and_close(state, ModalKind::TitleContent, None),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn LoadingDialog() -> Element {
    let state = use_context::<AppState>();
    let Some(payload) = state.modals.read().loading().cloned() else {
        return rsx! {};
    };

    rsx! {
        div { class: "modal-backdrop", style: BACKDROP_STYLE,
            div { class: "modal-card", style: CARD_STYLE,
                p { style: "margin: 0;", "{payload.message}" }
            }
        }
    }
}
