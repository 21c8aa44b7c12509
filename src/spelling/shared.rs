//! A lock-guarded handle for using one index from several threads.
//!
//! [`BkTree`] itself is not synchronized. When words keep arriving while
//! other threads are searching, wrap the tree in a [`SharedIndex`]: inserts
//! take the write lock, searches take the read lock.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::spelling::bk_tree::BkTree;
use crate::spelling::suggest::Suggestion;

/// Cloneable, thread-safe handle to a single [`BkTree`].
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    tree: Arc<RwLock<BkTree>>,
}

impl SharedIndex {
    /// Create a handle around an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word.
    pub fn add<S: Into<String>>(&self, word: S) {
        self.tree.write().add(word);
    }

    /// Insert a batch of words under a single write lock.
    pub fn extend<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tree.write().extend(words);
    }

    /// Words within `max_distance` of `query`, in search order.
    ///
    /// Results are owned because they must outlive the read guard.
    pub fn search(&self, query: &str, max_distance: i64) -> Vec<Suggestion> {
        self.tree
            .read()
            .search_with_distance(query, max_distance)
            .into_iter()
            .map(Suggestion::from)
            .collect()
    }

    /// Number of words inserted so far.
    pub fn len(&self) -> usize {
        self.tree.read().len()
    }

    /// True if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.tree.read().is_empty()
    }

    /// Copy the current tree out of the lock.
    pub fn snapshot(&self) -> BkTree {
        self.tree.read().clone()
    }
}

impl From<BkTree> for SharedIndex {
    fn from(tree: BkTree) -> Self {
        SharedIndex {
            tree: Arc::new(RwLock::new(tree)),
        }
    }
}
