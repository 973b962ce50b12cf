//! Month-grid calendar with per-day entry counts.
//!
//! Every prev/next navigation refreshes the whole month from the server;
//! slow responses land whenever they land, and the latest arrival wins.

use std::sync::Arc;

use chrono::Datelike;
use dioxus::prelude::*;

use ladle_core::calendar::{day_counts, MonthWindow};
use ladle_core::modal::{CalendarModal, OptionModal};
use ladle_core::models::{CalendarEntry, CalendarQuery, RecipeCategory};

use crate::state::AppState;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn MiniCalendar(member_id: i64) -> Element {
    let mut state = use_context::<AppState>();
    let mut window = use_signal(MonthWindow::current);
    let mut entries = use_signal(Vec::<CalendarEntry>::new);
    let filter = use_signal(|| None::<RecipeCategory>);

    // Subscribes to the window, the filter, and the client handle only;
    // writing `entries` from inside must not re-trigger the fetch.
    use_effect(move || {
        let current = window();
        let recipe = filter();
        let client = state.api.read().clone();
        spawn(async move {
            let Some(client) = client else { return };
            let query = CalendarQuery {
                member_id,
                start: current.start(),
                end: current.end(),
                recipe,
            };
            match client.search_calendar(&query).await {
                Ok(fetched) => entries.set(fetched),
                Err(error) => {
                    tracing::warn!("Calendar fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    });

    let current = window();
    let counts = day_counts(&entries.read());
    let cells: Vec<(Option<chrono::NaiveDate>, u32, usize)> = current
        .grid_days()
        .into_iter()
        .map(|cell| {
            let day_number = cell.map_or(0, |day| day.day());
            let count = cell
                .and_then(|day| counts.get(&day).copied())
                .unwrap_or(0);
            (cell, day_number, count)
        })
        .collect();

    rsx! {
        div { class: "mini-calendar", style: "max-width: 420px;",
            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                button { onclick: move |_| { let next = window().prev(); window.set(next); }, "<" }
                span { style: "font-weight: 600;", "{current.year}-{current.month:02}" }
                button { onclick: move |_| { let next = window().next(); window.set(next); }, ">" }
                button {
                    onclick: move |_| {
                        state.modals.write().set_option(OptionModal {
                            message: "Show entries for".to_string(),
                            options: vec![
                                "All".to_string(),
                                "Cocktails".to_string(),
                                "Food".to_string(),
                            ],
                            on_option: Arc::new(move |choice| {
                                let mut filter = filter;
                                filter.set(match choice {
                                    "Cocktails" => Some(RecipeCategory::Cocktail),
                                    "Food" => Some(RecipeCategory::Food),
                                    _ => None,
                                });
                            }),
                            on_cancel: None,
                        });
                    },
                    "Filter"
                }
            }
            div { style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px;",
                for label in WEEKDAY_LABELS {
                    span { style: "text-align: center; font-size: 12px; color: #888;", "{label}" }
                }
                for (cell, day_number, count) in cells {
                    if let Some(day) = cell {
                        button {
                            style: "min-height: 48px; border: 1px solid #eee; border-radius: 6px; background: #fff; cursor: pointer;",
                            onclick: move |_| {
                                state.modals.write().set_calendar(CalendarModal {
                                    date: day,
                                    member_id,
                                    message: String::new(),
                                });
                            },
                            div { "{day_number}" }
                            if count > 0 {
                                div { style: "font-size: 11px; color: #e07a3f;", "{count}" }
                            }
                        }
                    } else {
                        span {}
                    }
                }
            }
        }
    }
}
