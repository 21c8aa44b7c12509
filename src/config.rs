//! File-based configuration for the `namesake` binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{NamesakeError, Result};
use crate::spelling::suggest::SuggestionConfig;

/// Top-level configuration, stored as JSON.
///
/// ```json
/// {
///   "corpus": "names.txt",
///   "suggestion": { "max_distance": 2, "max_suggestions": 10,
///                   "normalization": { "trim": true, "lowercase": true } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamesakeConfig {
    /// Corpus file with one word per line. The built-in names are used when unset.
    pub corpus: Option<PathBuf>,

    /// Suggestion settings.
    pub suggestion: SuggestionConfig,
}

impl NamesakeConfig {
    /// Load configuration from a JSON file.
    ///
    /// A relative `corpus` path is resolved against the config file's directory.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: NamesakeConfig = serde_json::from_str(&content)?;

        if let Some(corpus) = &config.corpus
            && corpus.is_relative()
            && let Some(parent) = path.parent()
        {
            config.corpus = Some(parent.join(corpus));
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings that can never produce output.
    pub fn validate(&self) -> Result<()> {
        if self.suggestion.max_suggestions == Some(0) {
            return Err(NamesakeError::config(
                "suggestion.max_suggestions must be at least 1",
            ));
        }
        Ok(())
    }
}
