//! Levenshtein distance calculation for fuzzy matching.
//!
//! Distances are counted in Unicode scalar values (`char`), never bytes, and
//! characters are compared as-is: no case folding or normalization happens
//! here. Callers that want case-insensitive matching normalize before calling.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions or substitutions) required to change `a` into `b`. It is a true
/// metric: `d(x, x) == 0`, `d(a, b) == d(b, a)` and
/// `d(a, c) <= d(a, b) + d(b, c)`, which is what makes BK-tree pruning sound.
///
/// The DP table has `len(b) + 1` rows and `len(a) + 1` columns, but only two
/// rows are kept alive at a time.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    distance_to_chars(&a_chars, b)
}

/// Distance between pre-decoded `a_chars` and `b`.
fn distance_to_chars(a_chars: &[char], b: &str) -> usize {
    let len_a = a_chars.len();

    // Row 0 is 0..=len(a)
    let mut prev_row: Vec<usize> = (0..=len_a).collect();
    let mut curr_row = vec![0; len_a + 1];

    for (i, b_char) in b.chars().enumerate() {
        // Column 0 is 0..=len(b)
        curr_row[0] = i + 1;

        for (j, &a_char) in a_chars.iter().enumerate() {
            curr_row[j + 1] = if b_char == a_char {
                prev_row[j]
            } else {
                1 + min(
                    min(
                        prev_row[j], // diagonal
                        curr_row[j], // left
                    ),
                    prev_row[j + 1], // above
                )
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len_a]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold, which can be more efficient
/// for filtering candidates.
pub fn levenshtein_distance_threshold(a: &str, b: &str, threshold: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    threshold_to_chars(&a_chars, b, threshold)
}

/// Bounded distance between pre-decoded `a_chars` and `b`.
fn threshold_to_chars(a_chars: &[char], b: &str, threshold: usize) -> Option<usize> {
    let len_a = a_chars.len();
    let len_b = b.chars().count();

    // Length difference is a lower bound on the distance
    if len_a.abs_diff(len_b) > threshold {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=len_a).collect();
    let mut curr_row = vec![0; len_a + 1];

    for (i, b_char) in b.chars().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &a_char) in a_chars.iter().enumerate() {
            curr_row[j + 1] = if b_char == a_char {
                prev_row[j]
            } else {
                1 + min(min(prev_row[j], curr_row[j]), prev_row[j + 1])
            };
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Row minima never decrease, so the final cell cannot come back under
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len_a];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

/// A query decoded once and compared against many candidates.
///
/// BK-tree searches compute one distance per visited node, always against the
/// same query, so the query's chars are collected up front.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();

        LevenshteinMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Give back the query string.
    pub fn into_query(self) -> String {
        self.query
    }

    /// Number of chars in the query.
    pub fn query_len(&self) -> usize {
        self.query_chars.len()
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        distance_to_chars(&self.query_chars, candidate)
    }

    /// Distance to a candidate, or `None` once it is known to exceed `max_distance`.
    pub fn distance_within(&self, candidate: &str, max_distance: usize) -> Option<usize> {
        threshold_to_chars(&self.query_chars, candidate, max_distance)
    }

    /// Check if a candidate is within the given edit distance.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_within(candidate, max_distance).is_some()
    }
}
