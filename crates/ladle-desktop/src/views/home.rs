//! Landing page with the most-consumed recipes per category.

use dioxus::prelude::*;

use ladle_core::models::{RecipeCategory, TopRatedRecipe};

use crate::app::Route;
use crate::state::AppState;

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let mut cocktails = use_signal(Vec::<TopRatedRecipe>::new);
    let mut foods = use_signal(Vec::<TopRatedRecipe>::new);

    use_effect(move || {
        let client = state.api.read().clone();
        spawn(async move {
            let Some(client) = client else { return };
            // Recommendation rows are decorative; a failed fetch leaves the
            // row empty without interrupting the page.
            match client.top_rated(RecipeCategory::Cocktail).await {
                Ok(rows) => cocktails.set(rows),
                Err(error) => tracing::warn!("Top cocktails fetch failed: {}", error),
            }
            match client.top_rated(RecipeCategory::Food).await {
                Ok(rows) => foods.set(rows),
                Err(error) => tracing::warn!("Top foods fetch failed: {}", error),
            }
        });
    });

    rsx! {
        div {
            h1 { "Ladle" }
            p { style: "color: #888;", "Share recipes, plan your week, argue in the comments." }
            TopRatedRow { title: "Popular cocktails", category: RecipeCategory::Cocktail, rows: cocktails() }
            TopRatedRow { title: "Popular dishes", category: RecipeCategory::Food, rows: foods() }
        }
    }
}

#[component]
fn TopRatedRow(title: String, category: RecipeCategory, rows: Vec<TopRatedRecipe>) -> Element {
    rsx! {
        section { style: "margin-top: 24px;",
            h2 { "{title}" }
            if rows.is_empty() {
                p { style: "color: #aaa;", "Nothing here yet." }
            }
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 12px;",
                for row in rows {
                    TopRatedCard { key: "{row.recipe_id}", category, row }
                }
            }
        }
    }
}

#[component]
fn TopRatedCard(category: RecipeCategory, row: TopRatedRecipe) -> Element {
    let rate = format!("{:.1}", row.rate);

    rsx! {
        Link {
            to: Route::RecipeDetailPage {
                category: category.as_str().to_string(),
                id: row.recipe_id.clone(),
            },
            div { style: "border: 1px solid #eee; border-radius: 10px; overflow: hidden; background: #fff;",
                img {
                    style: "width: 100%; height: 120px; object-fit: cover;",
                    src: "{row.img}",
                    alt: "{row.title}",
                }
                div { style: "padding: 8px 12px;",
                    p { style: "margin: 0; font-weight: 600;", "{row.title}" }
                    p { style: "margin: 0; font-size: 12px; color: #888;",
                        "{row.count} plates, rated {rate}"
                    }
                }
            }
        }
    }
}
