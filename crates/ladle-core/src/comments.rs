//! Nested comment thread view-state.
//!
//! The server owns the tree shape (replies arrive nested under their
//! parents); this module only holds what the UI layers on top: the current
//! root page, the per-node expand set, and optimistic appends.
//!
//! On reply submission the UI appends a synthetic node immediately, before
//! server confirmation, to avoid a flicker. The synthetic entry is not
//! reconciled or rolled back if the server call fails; that gap is part of
//! the contract and pinned by a test below.

use std::collections::HashSet;

use crate::models::{CommentId, CommentNode};

/// Fixed page size for top-level comment pages.
pub const PAGE_SIZE: u32 = 10;

/// View state for one comment thread.
#[derive(Debug, Clone)]
pub struct CommentThread {
    /// Current top-level page number (zero-based).
    pub page: u32,
    /// Root comments of the current page, server-shaped.
    pub comments: Vec<CommentNode>,
    /// Which subtrees are rendered. Transient UI state, never persisted.
    expanded: HashSet<CommentId>,
    /// Next synthetic id, counting down so it can never collide with a
    /// server-assigned id.
    next_synthetic_id: CommentId,
}

impl Default for CommentThread {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentThread {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 0,
            comments: Vec::new(),
            expanded: HashSet::new(),
            next_synthetic_id: -1,
        }
    }

    /// Replace (not append) the root list with a freshly fetched page.
    pub fn replace_page(&mut self, page: u32, roots: Vec<CommentNode>) {
        self.page = page;
        self.comments = roots;
    }

    /// Toggle one node's subtree. Siblings are unaffected.
    pub fn toggle_expanded(&mut self, id: CommentId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: CommentId) -> bool {
        self.expanded.contains(&id)
    }

    /// Append a synthetic top-level comment ahead of server confirmation.
    pub fn push_optimistic_root(
        &mut self,
        nickname: impl Into<String>,
        content: impl Into<String>,
    ) -> CommentId {
        let id = self.take_synthetic_id();
        self.comments.push(CommentNode {
            comment_id: id,
            nickname: nickname.into(),
            content: content.into(),
            parent_comment_id: None,
            replies: Vec::new(),
        });
        id
    }

    /// Append a synthetic reply under a top-level parent ahead of server
    /// confirmation. Returns `None` when the parent is not on the current
    /// page (the reply input is only rendered for visible parents).
    pub fn push_optimistic_reply(
        &mut self,
        parent_id: CommentId,
        nickname: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<CommentId> {
        let id = self.take_synthetic_id();
        let parent = self
            .comments
            .iter_mut()
            .find(|comment| comment.comment_id == parent_id)?;
        parent.replies.push(CommentNode {
            comment_id: id,
            nickname: nickname.into(),
            content: content.into(),
            parent_comment_id: Some(parent_id),
            replies: Vec::new(),
        });
        Some(id)
    }

    fn take_synthetic_id(&mut self) -> CommentId {
        let id = self.next_synthetic_id;
        self.next_synthetic_id -= 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn node(id: CommentId, content: &str) -> CommentNode {
        CommentNode {
            comment_id: id,
            nickname: "amy".to_string(),
            content: content.to_string(),
            parent_comment_id: None,
            replies: Vec::new(),
        }
    }

    #[test]
    fn switching_pages_replaces_roots() {
        let mut thread = CommentThread::new();
        thread.replace_page(0, vec![node(1, "first"), node(2, "second")]);
        thread.replace_page(1, vec![node(3, "third")]);

        assert_eq!(thread.page, 1);
        assert_eq!(thread.comments.len(), 1);
        assert_eq!(thread.comments[0].comment_id, 3);
    }

    #[test]
    fn expand_toggles_are_independent_per_node() {
        let mut thread = CommentThread::new();
        thread.replace_page(0, vec![node(1, "a"), node(2, "b")]);

        thread.toggle_expanded(1);
        assert!(thread.is_expanded(1));
        assert!(!thread.is_expanded(2));

        thread.toggle_expanded(1);
        assert!(!thread.is_expanded(1));
    }

    #[test]
    fn optimistic_reply_nests_under_visible_parent() {
        let mut thread = CommentThread::new();
        thread.replace_page(0, vec![node(5, "root")]);

        let id = thread.push_optimistic_reply(5, "bea", "cheers").unwrap();
        assert!(id < 0);

        let reply = &thread.comments[0].replies[0];
        assert_eq!(reply.parent_comment_id, Some(5));
        assert_eq!(reply.content, "cheers");
    }

    #[test]
    fn optimistic_reply_to_missing_parent_is_dropped() {
        let mut thread = CommentThread::new();
        assert_eq!(thread.push_optimistic_reply(42, "bea", "hello"), None);
    }

    #[test]
    fn synthetic_node_survives_simulated_server_failure() {
        // Known gap: no reconciliation or rollback exists. A failed create
        // call leaves the synthetic node visible until the next page fetch.
        let mut thread = CommentThread::new();
        thread.replace_page(0, vec![node(5, "root")]);
        let id = thread.push_optimistic_reply(5, "bea", "cheers").unwrap();

        let server_result: crate::Result<()> = Err(crate::ApiError::Api("boom".to_string()));
        assert!(server_result.is_err());
        assert!(thread.comments[0]
            .replies
            .iter()
            .any(|reply| reply.comment_id == id));
    }

    #[test]
    fn synthetic_ids_are_unique_and_negative() {
        let mut thread = CommentThread::new();
        let a = thread.push_optimistic_root("amy", "one");
        let b = thread.push_optimistic_root("amy", "two");
        assert!(a < 0 && b < 0);
        assert_ne!(a, b);
    }

    #[test]
    fn default_thread_mints_negative_synthetic_ids() {
        let mut thread = CommentThread::default();
        let id = thread.push_optimistic_root("amy", "one");
        assert!(id < 0);
    }
}
