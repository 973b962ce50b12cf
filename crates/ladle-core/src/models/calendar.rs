//! Calendar entry wire models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Backend-assigned calendar row identifier.
pub type CalendarId = i64;

/// Which recipe catalogue an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Cocktail,
    Food,
}

impl RecipeCategory {
    /// Lowercase path segment, matching the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cocktail => "cocktail",
            Self::Food => "food",
        }
    }
}

/// One consumed-recipe row owned by a member.
///
/// `date` keeps the server's raw string representation; day-level comparison
/// goes through [`crate::calendar::entry_day`] so a time component can never
/// shift an entry across a day boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub calendar_id: CalendarId,
    pub member_id: i64,
    pub recipe_id: String,
    pub recipe_name: String,
    pub category: RecipeCategory,
    pub date: String,
    pub amount: String,
    pub memo: String,
}

/// Date-range query for a member's calendar window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarQuery {
    pub member_id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Optional category filter; `None` returns both catalogues.
    pub recipe: Option<RecipeCategory>,
}

/// Create/update payload for a calendar entry. The update path additionally
/// carries the row id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CalendarId>,
    pub recipe_id: String,
    pub date: String,
    pub amount: String,
    pub memo: String,
    pub category: RecipeCategory,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecipeCategory::Cocktail).unwrap(),
            r#""cocktail""#
        );
    }

    #[test]
    fn draft_without_id_omits_the_field() {
        let draft = CalendarDraft {
            id: None,
            recipe_id: "r-1".to_string(),
            date: "2024-05-01".to_string(),
            amount: "1 serving".to_string(),
            memo: String::new(),
            category: RecipeCategory::Food,
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("\"id\""));
    }
}
