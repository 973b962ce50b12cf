//! Weekly calendar overlay.
//!
//! Opens from a day cell in the month grid and fetches its own seven-day
//! window around the selected date, independent of the month view. Entry
//! edits go through `CalendarDraft` and bump a refresh version so the
//! week re-fetches after every write.

use std::sync::Arc;

use chrono::NaiveDate;
use dioxus::prelude::*;

use ladle_core::calendar::{entry_day, WeekWindow};
use ladle_core::modal::{ConfirmModal, ModalKind};
use ladle_core::models::{CalendarDraft, CalendarEntry, CalendarQuery, RecipeCategory};

use crate::state::AppState;

#[component]
pub fn CalendarOverlay(date: NaiveDate, member_id: i64, message: String) -> Element {
    let mut state = use_context::<AppState>();
    let mut entries = use_signal(Vec::<CalendarEntry>::new);
    let mut editing = use_signal(|| None::<CalendarDraft>);
    let mut refresh = use_signal(|| 0u64);

    let week = WeekWindow::surrounding(date);

    use_effect(move || {
        let _version = refresh();
        let client = state.api.read().clone();
        spawn(async move {
            let Some(client) = client else { return };
            let query = CalendarQuery {
                member_id,
                start: week.start,
                end: week.end,
                recipe: None,
            };
            match client.search_calendar(&query).await {
                Ok(fetched) => entries.set(fetched),
                Err(error) => {
                    tracing::warn!("Week fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    });

    let save = move |_| {
        let Some(draft) = editing() else { return };
        if draft.recipe_id.trim().is_empty() {
            state.reject("A recipe is required.");
            return;
        }
        spawn(async move {
            let Some(client) = state.api_client() else { return };
            // Create path: same-day duplicate check before submitting.
            if draft.id.is_none() {
                if let Some(day) = entry_day(&draft.date) {
                    match client.calendar_exists(day, &draft.recipe_id).await {
                        Ok(true) => {
                            state.reject("That recipe is already on this day.");
                            return;
                        }
                        Ok(false) => {}
                        Err(error) => {
                            tracing::warn!("Duplicate check failed: {}", error);
                            state.reject(error.user_message());
                            return;
                        }
                    }
                }
            }
            let outcome = match draft.id {
                Some(id) => client.update_calendar(id, &draft).await,
                None => client.create_calendar(&draft).await,
            };
            match outcome {
                Ok(true) => {
                    editing.set(None);
                    refresh += 1;
                }
                Ok(false) => state.reject("The calendar entry was not saved."),
                Err(error) => {
                    tracing::warn!("Calendar save failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    };

    let day_entries: Vec<(NaiveDate, Vec<CalendarEntry>)> = week
        .days()
        .into_iter()
        .map(|day| {
            let on_day = entries
                .read()
                .iter()
                .filter(|entry| entry_day(&entry.date) == Some(day))
                .cloned()
                .collect();
            (day, on_day)
        })
        .collect();

    rsx! {
        div {
            class: "modal-backdrop",
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45); display: flex; align-items: center; justify-content: center; z-index: 100;",
            div {
                class: "modal-card",
                style: "background: #fff; border-radius: 10px; padding: 24px; width: 560px; max-height: 80vh; overflow-y: auto;",
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                    h2 { style: "margin: 0;", "Week of {week.start}" }
                    button {
                        onclick: move |_| state.modals.write().close(ModalKind::Calendar),
                        "Close"
                    }
                }
                if !message.is_empty() {
                    p { style: "color: #888;", "{message}" }
                }
                for (day, on_day) in day_entries {
                    div { style: "margin-bottom: 12px;",
                        div {
                            style: if day == date {
                                "font-weight: 700; color: #e07a3f;"
                            } else {
                                "font-weight: 600;"
                            },
                            "{day}"
                        }
                        if on_day.is_empty() {
                            p { style: "margin: 4px 0; font-size: 13px; color: #aaa;", "No entries" }
                        }
                        for entry in on_day {
                            EntryRow { entry, refresh, editing }
                        }
                        button {
                            style: "font-size: 12px;",
                            onclick: move |_| {
                                editing.set(Some(CalendarDraft {
                                    id: None,
                                    recipe_id: String::new(),
                                    date: day.to_string(),
                                    amount: String::new(),
                                    memo: String::new(),
                                    category: RecipeCategory::Food,
                                }));
                            },
                            "+ Add entry"
                        }
                    }
                }
                if editing().is_some() {
                    EntryForm { editing, on_save: save }
                }
            }
        }
    }
}

#[component]
fn EntryRow(
    entry: CalendarEntry,
    refresh: Signal<u64>,
    editing: Signal<Option<CalendarDraft>>,
) -> Element {
    let mut state = use_context::<AppState>();
    let mut editing = editing;
    let entry_id = entry.calendar_id;

    let edit = {
        let entry = entry.clone();
        move |_| {
            editing.set(Some(CalendarDraft {
                id: Some(entry.calendar_id),
                recipe_id: entry.recipe_id.clone(),
                date: entry.date.clone(),
                amount: entry.amount.clone(),
                memo: entry.memo.clone(),
                category: entry.category,
            }));
        }
    };

    let delete = move |_| {
        let mut refresh = refresh;
        state.modals.write().set_confirm(ConfirmModal {
            message: "Delete this calendar entry?".to_string(),
            on_confirm: Arc::new(move || {
                let mut state = state;
                let mut refresh = refresh;
                spawn(async move {
                    let Some(client) = state.api_client() else { return };
                    match client.delete_calendar(entry_id).await {
                        Ok(true) => refresh += 1,
                        Ok(false) => state.reject("The calendar entry was not deleted."),
                        Err(error) => {
                            tracing::warn!("Calendar delete failed: {}", error);
                            state.reject(error.user_message());
                        }
                    }
                });
            }),
            on_cancel: None,
        });
    };

    rsx! {
        div { style: "display: flex; align-items: center; gap: 8px; padding: 4px 0; font-size: 14px;",
            span { style: "flex: 1;", "{entry.recipe_name}" }
            span { style: "color: #888;", "{entry.amount}" }
            if !entry.memo.is_empty() {
                span { style: "color: #aaa; font-size: 12px;", "{entry.memo}" }
            }
            button { onclick: edit, "Edit" }
            button { onclick: delete, "Delete" }
        }
    }
}

#[component]
fn EntryForm(editing: Signal<Option<CalendarDraft>>, on_save: EventHandler<MouseEvent>) -> Element {
    let Some(draft) = editing() else {
        return rsx! {};
    };
    let mut editing = editing;
    let category_value = draft.category.as_str();

    rsx! {
        div { style: "border-top: 1px solid #eee; margin-top: 12px; padding-top: 12px;",
            h3 { style: "margin: 0 0 8px;",
                if draft.id.is_some() { "Edit entry" } else { "New entry on {draft.date}" }
            }
            input {
                style: "display: block; width: 100%; margin-bottom: 8px; padding: 6px;",
                placeholder: "Recipe id",
                value: "{draft.recipe_id}",
                oninput: move |evt| {
                    if let Some(draft) = editing.write().as_mut() {
                        draft.recipe_id = evt.value();
                    }
                },
            }
            select {
                style: "display: block; margin-bottom: 8px; padding: 6px;",
                value: "{category_value}",
                onchange: move |evt| {
                    if let Some(draft) = editing.write().as_mut() {
                        draft.category = if evt.value() == "cocktail" {
                            RecipeCategory::Cocktail
                        } else {
                            RecipeCategory::Food
                        };
                    }
                },
                option { value: "food", "Food" }
                option { value: "cocktail", "Cocktail" }
            }
            input {
                style: "display: block; width: 100%; margin-bottom: 8px; padding: 6px;",
                placeholder: "Amount",
                value: "{draft.amount}",
                oninput: move |evt| {
                    if let Some(draft) = editing.write().as_mut() {
                        draft.amount = evt.value();
                    }
                },
            }
            input {
                style: "display: block; width: 100%; margin-bottom: 8px; padding: 6px;",
                placeholder: "Memo",
                value: "{draft.memo}",
                oninput: move |evt| {
                    if let Some(draft) = editing.write().as_mut() {
                        draft.memo = evt.value();
                    }
                },
            }
            div { style: "display: flex; gap: 8px; justify-content: flex-end;",
                button { onclick: move |_| editing.set(None), "Cancel" }
                button { onclick: move |evt| on_save.call(evt), "Save" }
            }
        }
    }
}
