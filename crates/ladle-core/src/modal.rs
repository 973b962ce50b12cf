//! Centralized modal/overlay state.
//!
//! Every dialog in the app is driven from this store so trigger sites are
//! decoupled from render sites. Each kind holds at most one payload:
//! setting a payload before the previous dialog of that kind closes
//! silently replaces it (last-write-wins, no queue), and closing a kind
//! clears its payload so callback closures are never retained across
//! unrelated opens.

use std::sync::Arc;

use chrono::NaiveDate;

/// Plain notification/cancel callback. Callbacks run on the UI event
/// loop, which serializes all store mutations, so no `Send`/`Sync` bound
/// is required.
pub type Callback = Arc<dyn Fn()>;
/// Option-picker callback, invoked with the chosen option value.
pub type OptionCallback = Arc<dyn Fn(&str)>;
/// Context-menu callback, invoked with the chosen value and the target id.
pub type CursorCallback = Arc<dyn Fn(&str, &str)>;
/// Submit callback for text-entry dialogs.
pub type SubmitCallback = Arc<dyn Fn(SubmitData)>;

/// Enumerated overlay-dialog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Login,
    Signup,
    Confirm,
    Reject,
    Submit,
    Option,
    Cursor,
    TitleContent,
    Calendar,
    Loading,
}

/// Yes/no dialog with a message and confirm/cancel callbacks.
#[derive(Clone)]
pub struct ConfirmModal {
    pub message: String,
    pub on_confirm: Callback,
    pub on_cancel: Option<Callback>,
}

/// Error/notice dialog with a single dismiss action.
#[derive(Clone)]
pub struct RejectModal {
    pub message: String,
    pub on_cancel: Option<Callback>,
}

/// Pick-one-of-N dialog.
#[derive(Clone)]
pub struct OptionModal {
    pub message: String,
    pub options: Vec<String>,
    pub on_option: OptionCallback,
    pub on_cancel: Option<Callback>,
}

/// Initial values for a submit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitData {
    pub content: String,
    pub id: String,
}

/// Free-text entry dialog (comment edit, report reason, ...).
#[derive(Clone)]
pub struct SubmitModal {
    pub message: String,
    pub initial: SubmitData,
    /// Maximum content length, when the caller wants one enforced.
    pub restriction: Option<usize>,
    pub on_submit: SubmitCallback,
    pub on_cancel: Option<Callback>,
}

/// Context menu anchored at a screen position, scoped to a target id.
#[derive(Clone)]
pub struct CursorModal {
    pub message: String,
    pub options: Vec<String>,
    pub position: Option<(f64, f64)>,
    pub id: String,
    pub on_option: CursorCallback,
    pub on_cancel: Option<Callback>,
}

/// Read-only title + body dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleContentModal {
    pub title: String,
    pub content: String,
}

/// Day-scoped calendar dialog for the owning member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarModal {
    pub date: NaiveDate,
    pub member_id: i64,
    pub message: String,
}

/// Blocking progress overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingModal {
    pub message: String,
}

/// One record per modal kind; process-wide singleton behind a signal in the
/// UI layer.
#[derive(Clone, Default)]
pub struct ModalStore {
    login_open: bool,
    signup_open: bool,
    confirm: Option<ConfirmModal>,
    reject: Option<RejectModal>,
    option: Option<OptionModal>,
    submit: Option<SubmitModal>,
    cursor: Option<CursorModal>,
    title_content: Option<TitleContentModal>,
    calendar: Option<CalendarModal>,
    loading: Option<LoadingModal>,
}

impl ModalStore {
    /// Open a payload-free modal (login/signup). Payload-carrying kinds are
    /// opened through their `set_*` method.
    pub fn open(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::Login => self.login_open = true,
            ModalKind::Signup => self.signup_open = true,
            _ => {}
        }
    }

    /// Close one modal kind and clear its payload.
    pub fn close(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::Login => self.login_open = false,
            ModalKind::Signup => self.signup_open = false,
            ModalKind::Confirm => self.confirm = None,
            ModalKind::Reject => self.reject = None,
            ModalKind::Option => self.option = None,
            ModalKind::Submit => self.submit = None,
            ModalKind::Cursor => self.cursor = None,
            ModalKind::TitleContent => self.title_content = None,
            ModalKind::Calendar => self.calendar = None,
            ModalKind::Loading => self.loading = None,
        }
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Login => self.login_open,
            ModalKind::Signup => self.signup_open,
            ModalKind::Confirm => self.confirm.is_some(),
            ModalKind::Reject => self.reject.is_some(),
            ModalKind::Option => self.option.is_some(),
            ModalKind::Submit => self.submit.is_some(),
            ModalKind::Cursor => self.cursor.is_some(),
            ModalKind::TitleContent => self.title_content.is_some(),
            ModalKind::Calendar => self.calendar.is_some(),
            ModalKind::Loading => self.loading.is_some(),
        }
    }

    pub fn set_confirm(&mut self, payload: ConfirmModal) {
        self.confirm = Some(payload);
    }

    pub fn set_reject(&mut self, payload: RejectModal) {
        self.reject = Some(payload);
    }

    /// Shorthand for the per-call-site catch-and-notify policy: every failed
    /// backend call surfaces as a reject dialog with no cancel callback.
    pub fn reject_message(&mut self, message: impl Into<String>) {
        self.set_reject(RejectModal {
            message: message.into(),
            on_cancel: None,
        });
    }

    pub fn set_option(&mut self, payload: OptionModal) {
        self.option = Some(payload);
    }

    pub fn set_submit(&mut self, payload: SubmitModal) {
        self.submit = Some(payload);
    }

    pub fn set_cursor(&mut self, payload: CursorModal) {
        self.cursor = Some(payload);
    }

    pub fn set_title_content(&mut self, payload: TitleContentModal) {
        self.title_content = Some(payload);
    }

    pub fn set_calendar(&mut self, payload: CalendarModal) {
        self.calendar = Some(payload);
    }

    pub fn set_loading(&mut self, payload: LoadingModal) {
        self.loading = Some(payload);
    }

    #[must_use]
    pub fn confirm(&self) -> Option<&ConfirmModal> {
        self.confirm.as_ref()
    }

    #[must_use]
    pub fn reject(&self) -> Option<&RejectModal> {
        self.reject.as_ref()
    }

    #[must_use]
    pub fn option(&self) -> Option<&OptionModal> {
        self.option.as_ref()
    }

    #[must_use]
    pub fn submit(&self) -> Option<&SubmitModal> {
        self.submit.as_ref()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&CursorModal> {
        self.cursor.as_ref()
    }

    #[must_use]
    pub fn title_content(&self) -> Option<&TitleContentModal> {
        self.title_content.as_ref()
    }

    #[must_use]
    pub fn calendar(&self) -> Option<&CalendarModal> {
        self.calendar.as_ref()
    }

    #[must_use]
    pub fn loading(&self) -> Option<&LoadingModal> {
        self.loading.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn noop() -> Callback {
        Arc::new(|| {})
    }

    #[test]
    fn open_close_toggle_login_and_signup() {
        let mut store = ModalStore::default();
        store.open(ModalKind::Login);
        assert!(store.is_open(ModalKind::Login));
        assert!(!store.is_open(ModalKind::Signup));
        store.close(ModalKind::Login);
        assert!(!store.is_open(ModalKind::Login));
    }

    #[test]
    fn set_calendar_is_last_write_wins() {
        let mut store = ModalStore::default();
        store.set_calendar(CalendarModal {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            member_id: 7,
            message: "first".to_string(),
        });
        store.set_calendar(CalendarModal {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            member_id: 7,
            message: "second".to_string(),
        });

        let current = store.calendar().unwrap();
        assert_eq!(current.date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(current.message, "second");
    }

    #[test]
    fn replaced_submit_payload_exposes_new_seed() {
        // The dialog re-seeds its editor from `initial`; a replacement must
        // surface the new target id and content through the accessor.
        let mut store = ModalStore::default();
        store.set_submit(SubmitModal {
            message: "Edit your post".to_string(),
            initial: SubmitData {
                content: "old body".to_string(),
                id: "11".to_string(),
            },
            restriction: Some(2000),
            on_submit: Arc::new(|_| {}),
            on_cancel: None,
        });
        store.set_submit(SubmitModal {
            message: "Edit your post".to_string(),
            initial: SubmitData {
                content: "new body".to_string(),
                id: "12".to_string(),
            },
            restriction: Some(2000),
            on_submit: Arc::new(|_| {}),
            on_cancel: None,
        });

        let current = store.submit().unwrap();
        assert_eq!(current.initial.id, "12");
        assert_eq!(current.initial.content, "new body");
    }

    #[test]
    fn replaced_confirm_payload_invokes_only_latest_callback() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut store = ModalStore::default();

        let first = Arc::clone(&fired);
        store.set_confirm(ConfirmModal {
            message: "first".to_string(),
            on_confirm: Arc::new(move || {
                first.fetch_add(1, Ordering::SeqCst);
            }),
            on_cancel: None,
        });
        let second = Arc::clone(&fired);
        store.set_confirm(ConfirmModal {
            message: "second".to_string(),
            on_confirm: Arc::new(move || {
                second.fetch_add(10, Ordering::SeqCst);
            }),
            on_cancel: None,
        });

        (store.confirm().unwrap().on_confirm)();
        assert_eq!(fired.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn closing_drops_retained_callback_closure() {
        let token = Arc::new(());
        let weak = Arc::downgrade(&token);

        let mut store = ModalStore::default();
        store.set_confirm(ConfirmModal {
            message: "delete?".to_string(),
            on_confirm: Arc::new(move || {
                let _keepalive = &token;
            }),
            on_cancel: Some(noop()),
        });
        assert!(weak.upgrade().is_some());

        store.close(ModalKind::Confirm);
        assert!(store.confirm().is_none());
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn close_all_resets_every_kind() {
        let mut store = ModalStore::default();
        store.open(ModalKind::Login);
        store.reject_message("boom");
        store.set_loading(LoadingModal {
            message: "uploading".to_string(),
        });

        store.close_all();

        for kind in [
            ModalKind::Login,
            ModalKind::Signup,
            ModalKind::Confirm,
            ModalKind::Reject,
            ModalKind::Option,
            ModalKind::Submit,
            ModalKind::Cursor,
            ModalKind::TitleContent,
            ModalKind::Calendar,
            ModalKind::Loading,
        ] {
            assert!(!store.is_open(kind));
        }
    }
}
