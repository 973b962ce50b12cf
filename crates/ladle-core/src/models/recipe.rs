//! Recipe wire models

use serde::{Deserialize, Serialize};

use super::RecipeCategory;

/// Card-sized recipe row used in list pages and recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub likes: i64,
}

/// Full recipe payload for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub category: RecipeCategory,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub likes: i64,
}

/// Most-consumed recipe aggregate from the calendar data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRatedRecipe {
    pub recipe_id: String,
    pub img: String,
    pub title: String,
    pub count: i64,
    pub rate: f64,
}
