//! Paged recipe list for one category.

use dioxus::prelude::*;

use ladle_core::models::{RecipeCategory, RecipeSummary};

use crate::components::RecipeCard;
use crate::state::AppState;

#[component]
pub fn RecipeList(category: String) -> Element {
    let Some(parsed) = parse_category(&category) else {
        return rsx! {
            p { "Unknown category \"{category}\"." }
        };
    };

    rsx! {
        // Keyed so switching categories resets the page and re-fetches.
        CategoryGrid { key: "{category}", category: parsed }
    }
}

pub(crate) fn parse_category(raw: &str) -> Option<RecipeCategory> {
    match raw {
        "cocktail" => Some(RecipeCategory::Cocktail),
        "food" => Some(RecipeCategory::Food),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_route_segments() {
        assert_eq!(parse_category("cocktail"), Some(RecipeCategory::Cocktail));
        assert_eq!(parse_category("food"), Some(RecipeCategory::Food));
        assert_eq!(parse_category("Food"), None);
        assert_eq!(parse_category(""), None);
    }
}

#[component]
fn CategoryGrid(category: RecipeCategory) -> Element {
    let mut state = use_context::<AppState>();
    let mut recipes = use_signal(Vec::<RecipeSummary>::new);
    let mut page = use_signal(|| 0u32);

    use_effect(move || {
        let current_page = page();
        let client = state.api.read().clone();
        spawn(async move {
            let Some(client) = client else { return };
            match client.recipes(category, current_page).await {
                Ok(rows) => recipes.set(rows),
                Err(error) => {
                    tracing::warn!("Recipe list fetch failed: {}", error);
                    state.reject(error.user_message());
                }
            }
        });
    });

    let rows = recipes();
    let page_display = page() + 1;
    let title = match category {
        RecipeCategory::Cocktail => "Cocktails",
        RecipeCategory::Food => "Dishes",
    };

    rsx! {
        div {
            h1 { "{title}" }
            if rows.is_empty() {
                p { style: "color: #aaa;", "No recipes on this page." }
            }
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px;",
                for recipe in rows {
                    RecipeCard { key: "{recipe.id}", recipe, category }
                }
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
