//! Recipe list card.

use dioxus::prelude::*;

use ladle_core::models::{RecipeCategory, RecipeSummary};

use crate::app::Route;

#[component]
pub fn RecipeCard(recipe: RecipeSummary, category: RecipeCategory) -> Element {
    rsx! {
        Link {
            to: Route::RecipeDetailPage {
                category: category.as_str().to_string(),
                id: recipe.id.clone(),
            },
            div {
                class: "recipe-card",
                style: "border: 1px solid #eee; border-radius: 10px; overflow: hidden; background: #fff;",
                img {
                    style: "width: 100%; height: 160px; object-fit: cover;",
                    src: "{recipe.image}",
                    alt: "{recipe.name}",
                }
                div { style: "padding: 8px 12px;",
                    p { style: "margin: 0; font-weight: 600;", "{recipe.name}" }
                    if recipe.likes > 0 {
                        p { style: "margin: 0; font-size: 12px; color: #888;", "{recipe.likes} likes" }
                    }
                }
            }
        }
    }
}
