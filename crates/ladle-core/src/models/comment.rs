//! Comment tree wire models

use serde::{Deserialize, Serialize};

/// Backend comment identifier. Synthetic optimistic nodes use negative ids
/// so they can never collide with server-assigned ones.
pub type CommentId = i64;

/// One node of a comment thread.
///
/// The server is the source of truth for the tree shape: replies arrive
/// nested under their parent, and the client never rebuilds the tree from a
/// flat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub comment_id: CommentId,
    pub nickname: String,
    pub content: String,
    pub parent_comment_id: Option<CommentId>,
    #[serde(default)]
    pub replies: Vec<CommentNode>,
}

/// Create payload for a top-level comment or a reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn node_defaults_missing_replies_to_empty() {
        let node: CommentNode = serde_json::from_str(
            r#"{"commentId":3,"nickname":"amy","content":"hi","parentCommentId":null}"#,
        )
        .unwrap();
        assert_eq!(node.parent_comment_id, None);
        assert!(node.replies.is_empty());
    }
}
