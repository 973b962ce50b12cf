//! Recipe detail page with the comment thread.

use dioxus::prelude::*;

use ladle_core::modal::CalendarModal;
use ladle_core::models::{RecipeCategory, RecipeDetail};

use crate::components::CommentSection;
use crate::state::AppState;

use super::recipe_list::parse_category;

#[component]
pub fn RecipeDetailPage(category: String, id: String) -> Element {
    let Some(parsed) = parse_category(&category) else {
        return rsx! {
            p { "Unknown category \"{category}\"." }
        };
    };

    rsx! {
        DetailBody { key: "{id}", category: parsed, id }
    }
}

#[component]
fn DetailBody(category: RecipeCategory, id: String) -> Element {
    let mut state = use_context::<AppState>();
    let mut recipe = use_signal(|| None::<RecipeDetail>);

    let fetch_id = id.clone();
    use_effect(move || {
        let client = state.api.read().clone();
        let id = fetch_id.clone();
        spawn(async move {
            let Some(client) = client else { return };
            match client.recipe_detail(category, &id).await {
                Ok(detail) => recipe.set(Some(detail)),
                Err(error) => {
                    tracing::warn!("Recipe detail fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    });

    let member_id = state.session.read().member_id();
    let current = recipe();

    rsx! {
        div {
            if let Some(detail) = current {
                img {
                    style: "width: 100%; max-height: 320px; object-fit: cover; border-radius: 10px;",
                    src: "{detail.image}",
                    alt: "{detail.name}",
                }
                div { style: "display: flex; align-items: center; gap: 12px; margin-top: 12px;",
                    h1 { style: "margin: 0; flex: 1;", "{detail.name}" }
                    if let Some(member_id) = member_id {
                        button {
                            onclick: {
                                let name = detail.name.clone();
                                move |_| {
                                    let today = chrono::Local::now().date_naive();
                                    state.modals.write().set_calendar(CalendarModal {
                                        date: today,
                                        member_id,
                                        message: format!("Add {name} to a day this week."),
                                    });
                                }
                            },
                            "Add to calendar"
                        }
                    }
                }
                p { "{detail.description}" }
                if !detail.ingredients.is_empty() {
                    h3 { "Ingredients" }
                    ul {
                        for ingredient in detail.ingredients.clone() {
                            li { "{ingredient}" }
                        }
                    }
                }
            } else {
                p { style: "color: #aaa;", "Loading recipe..." }
            }

            CommentSection { post_id: id }
        }
    }
}
