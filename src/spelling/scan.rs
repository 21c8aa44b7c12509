//! Brute-force matching over a plain word list.
//!
//! Compares the query against every word. It is the reference the BK-tree
//! must agree with, and the baseline it is benchmarked against.

use crate::spelling::bk_tree::Match;
use crate::spelling::levenshtein::levenshtein_distance_threshold;

/// A vocabulary searched by checking every entry.
#[derive(Debug, Clone, Default)]
pub struct LinearScan {
    words: Vec<String>,
}

impl LinearScan {
    /// Create an empty scanner.
    pub fn new() -> Self {
        LinearScan { words: Vec::new() }
    }

    /// Append a word.
    pub fn add<S: Into<String>>(&mut self, word: S) {
        self.words.push(word.into());
    }

    /// All words within `max_distance` of `query`, with the same ordering and
    /// deduplication as [`BkTree::search_with_distance`](crate::spelling::BkTree::search_with_distance).
    pub fn search_with_distance(&self, query: &str, max_distance: i64) -> Vec<Match<'_>> {
        if max_distance < 0 {
            return Vec::new();
        }
        let radius = usize::try_from(max_distance).unwrap_or(usize::MAX);

        let mut matches: Vec<Match<'_>> = self
            .words
            .iter()
            .filter_map(|word| {
                levenshtein_distance_threshold(query, word, radius).map(|distance| Match {
                    distance,
                    word: word.as_str(),
                })
            })
            .collect();

        matches.sort_unstable();
        matches.dedup();
        matches
    }

    /// Words only, see [`search_with_distance`](Self::search_with_distance).
    pub fn search(&self, query: &str, max_distance: i64) -> Vec<&str> {
        self.search_with_distance(query, max_distance)
            .into_iter()
            .map(|m| m.word)
            .collect()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LinearScan {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        LinearScan {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan() {
        let scan: LinearScan = ["camilo", "camila", "julia", "camila"].into_iter().collect();
        assert_eq!(scan.len(), 4);
        assert_eq!(scan.search("camila", 1), vec!["camila", "camilo"]);
        assert!(scan.search("camila", -1).is_empty());
    }

    #[test]
    fn test_empty_scan() {
        let mut scan = LinearScan::new();
        assert!(scan.is_empty());
        assert!(scan.search("x", 5).is_empty());
        scan.add("x");
        assert_eq!(scan.search("", 1), vec!["x"]);
    }
}
