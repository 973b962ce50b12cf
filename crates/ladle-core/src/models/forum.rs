//! Forum wire models

use serde::{Deserialize, Serialize};

pub type ForumPostId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumCategory {
    pub id: i64,
    pub title: String,
}

/// One forum post as listed and as fetched in detail. The list endpoint
/// sends the same shape with `content` truncated server-side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: ForumPostId,
    pub category_id: i64,
    pub member_id: i64,
    pub author_nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub likes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewForumPost {
    pub category_id: i64,
    pub title: String,
    pub content: String,
}
