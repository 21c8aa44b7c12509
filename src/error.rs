//! Error types for the Namesake library.
//!
//! The matching core (edit distance and the BK-tree) never fails. Errors only
//! come from the collaborators around it: corpus and config loading, input
//! validation in the suggestion engine, and the CLI.
//!
//! # Examples
//!
//! ```
//! use namesake::error::{NamesakeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NamesakeError::invalid_input("empty query"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Namesake operations.
#[derive(Error, Debug)]
pub enum NamesakeError {
    /// I/O errors (corpus files, config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Caller-supplied input that cannot be matched (e.g. blank query)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with NamesakeError.
pub type Result<T> = std::result::Result<T, NamesakeError>;

impl NamesakeError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        NamesakeError::InvalidInput(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NamesakeError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NamesakeError::invalid_input("no input to suggest for");
        assert_eq!(error.to_string(), "Invalid input: no input to suggest for");

        let error = NamesakeError::config("max_suggestions must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: max_suggestions must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let namesake_error = NamesakeError::from(io_error);

        match namesake_error {
            NamesakeError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let error = NamesakeError::from(anyhow::anyhow!("corpus missing"));
        assert!(matches!(error, NamesakeError::Anyhow(_)));
        assert!(error.to_string().contains("corpus missing"));
    }
}
