//! # Namesake
//!
//! Fuzzy name suggestion for Rust: given a possibly misspelled input, find the
//! words of a known vocabulary that are within a few single-character edits.
//!
//! ## Features
//!
//! - Levenshtein distance over Unicode characters
//! - Append-only BK-tree with radius-bounded search
//! - Corpus loading with an explicit normalization policy
//! - Suggestion engine with configurable distance and result limits
//! - Lock-guarded shared index for multi-threaded hosts
//!
//! ```
//! use namesake::prelude::*;
//!
//! let mut index = BkTree::new();
//! for name in ["camilo", "camila", "julia"] {
//!     index.add(name);
//! }
//! assert_eq!(index.search("camila", 1), vec!["camila", "camilo"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{NamesakeError, Result};
    pub use crate::spelling::{
        BkTree, BuiltinCorpus, Corpus, Match, Normalization, SharedIndex, Suggestion,
        SuggestionConfig, SuggestionEngine, levenshtein_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
