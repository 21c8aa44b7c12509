//! Fuzzy matching and name suggestion for Namesake.
//!
//! The core is the Levenshtein metric and the BK-tree built on it. The other
//! modules are thin layers around that core: corpus loading, a suggestion
//! engine for user input, a lock-guarded handle for multi-threaded hosts and
//! a brute-force scanner used as a reference.

pub mod bk_tree;
pub mod dictionary;
pub mod levenshtein;
pub mod scan;
pub mod shared;
pub mod suggest;

// Re-export commonly used types
pub use bk_tree::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use scan::*;
pub use shared::*;
pub use suggest::*;
