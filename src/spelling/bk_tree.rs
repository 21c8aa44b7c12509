//! BK-tree index for radius-bounded fuzzy lookups.
//!
//! Every edge is labelled with the Levenshtein distance between the parent's
//! word and the child's word. During a search with radius `r`, a node at
//! distance `d` from the query can only lead to matches through edges whose
//! label lies in `d - r ..= d + r` (triangle inequality), so every other
//! subtree is skipped.
//!
//! Nodes live in a flat arena and refer to their children by index. The tree
//! is append-only: words are never removed and nodes are never rebalanced.
//!
//! ```
//! use namesake::spelling::BkTree;
//!
//! let tree: BkTree = ["john", "jane", "julia"].into_iter().collect();
//! assert_eq!(tree.search("jhon", 2), vec!["john"]);
//! ```

use std::collections::BTreeMap;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::spelling::levenshtein::LevenshteinMatcher;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct BkNode {
    word: String,
    /// Edge label (distance to this node's word) -> child.
    children: BTreeMap<usize, NodeId>,
}

impl BkNode {
    fn new(word: String) -> Self {
        BkNode {
            word,
            children: BTreeMap::new(),
        }
    }
}

/// A word found by a search, with its distance to the query.
///
/// Ordering is by distance first, then by word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match<'a> {
    /// Edit distance between the query and `word`.
    pub distance: usize,
    /// The stored word.
    pub word: &'a str,
}

/// Shape statistics of a [`BkTree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of stored words, duplicates included.
    pub words: usize,
    /// Nodes on the longest root-to-leaf path (0 for an empty tree).
    pub depth: usize,
    /// Largest number of children of a single node.
    pub max_fanout: usize,
}

/// A Burkhard-Keller tree over Levenshtein distance.
///
/// The tree has no interior mutability: `add` needs `&mut self` and `search`
/// takes `&self`, so once built it can be shared between threads read-only.
/// For interleaved writers and readers see
/// [`SharedIndex`](crate::spelling::SharedIndex).
#[derive(Debug, Clone, Default)]
pub struct BkTree {
    nodes: Vec<BkNode>,
}

impl BkTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        BkTree { nodes: Vec::new() }
    }

    /// Insert a word.
    ///
    /// Words are stored exactly as given. Inserting a word that is already
    /// present is allowed: the copy hangs off the label-0 edge of its twin,
    /// so repeated inserts of the same word grow a chain. Filter duplicates
    /// beforehand if that matters.
    pub fn add<S: Into<String>>(&mut self, word: S) {
        let matcher = LevenshteinMatcher::new(word);

        if self.nodes.is_empty() {
            self.nodes.push(BkNode::new(matcher.into_query()));
            return;
        }

        let mut current = ROOT;
        loop {
            let distance = matcher.distance(&self.nodes[current].word);
            match self.nodes[current].children.get(&distance) {
                Some(&child) => current = child,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(BkNode::new(matcher.into_query()));
                    self.nodes[current].children.insert(distance, id);
                    return;
                }
            }
        }
    }

    /// All stored words within `max_distance` edits of `query`.
    ///
    /// Results are sorted by distance, then lexicographically, and each word
    /// appears once even if it was inserted several times. A negative
    /// `max_distance` matches nothing.
    pub fn search(&self, query: &str, max_distance: i64) -> Vec<&str> {
        self.search_with_distance(query, max_distance)
            .into_iter()
            .map(|m| m.word)
            .collect()
    }

    /// Like [`search`](Self::search), keeping each match's distance.
    pub fn search_with_distance(&self, query: &str, max_distance: i64) -> Vec<Match<'_>> {
        if max_distance < 0 || self.nodes.is_empty() {
            return Vec::new();
        }
        let radius = usize::try_from(max_distance).unwrap_or(usize::MAX);

        let matcher = LevenshteinMatcher::new(query);
        let mut matches = Vec::new();
        let mut stack = vec![ROOT];
        let mut visited = 0;

        while let Some(id) = stack.pop() {
            visited += 1;
            let node = &self.nodes[id];
            let distance = matcher.distance(&node.word);

            if distance <= radius {
                matches.push(Match {
                    distance,
                    word: &node.word,
                });
            }

            let low = distance.saturating_sub(radius);
            let high = distance.saturating_add(radius);
            stack.extend(node.children.range(low..=high).map(|(_, &child)| child));
        }

        matches.sort_unstable();
        matches.dedup();

        trace!(
            "search {:?} (radius {}): visited {} of {} nodes, {} matches",
            query,
            radius,
            visited,
            self.nodes.len(),
            matches.len()
        );

        matches
    }

    /// Whether `word` has been inserted.
    pub fn contains(&self, word: &str) -> bool {
        !self.search_with_distance(word, 0).is_empty()
    }

    /// Number of inserted words, duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stored words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.word.as_str())
    }

    /// Every edge as `(parent_word, label, child_word)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, usize, &str)> {
        self.nodes.iter().flat_map(move |node| {
            node.children.iter().map(move |(&label, &child)| {
                (node.word.as_str(), label, self.nodes[child].word.as_str())
            })
        })
    }

    /// Compute shape statistics.
    pub fn stats(&self) -> TreeStats {
        if self.nodes.is_empty() {
            return TreeStats::default();
        }

        let mut depth = 0;
        let mut stack = vec![(ROOT, 1)];
        while let Some((id, level)) = stack.pop() {
            depth = depth.max(level);
            stack.extend(
                self.nodes[id]
                    .children
                    .values()
                    .map(|&child| (child, level + 1)),
            );
        }

        TreeStats {
            words: self.nodes.len(),
            depth,
            max_fanout: self
                .nodes
                .iter()
                .map(|node| node.children.len())
                .max()
                .unwrap_or(0),
        }
    }
}

impl<S: Into<String>> Extend<S> for BkTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for BkTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = BkTree::new();
        tree.extend(iter);
        tree
    }
}
