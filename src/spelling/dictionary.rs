//! Corpus management: loading and normalizing the vocabulary fed to the index.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::bk_tree::BkTree;

/// How words and queries are cleaned up before they reach the index.
///
/// The index itself compares raw characters, so the same policy has to be
/// applied on both sides: to the corpus when it is loaded and to every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Normalization {
    /// Strip leading and trailing whitespace.
    pub trim: bool,
    /// Lowercase every character.
    pub lowercase: bool,
}

impl Default for Normalization {
    fn default() -> Self {
        Normalization {
            trim: true,
            lowercase: false,
        }
    }
}

impl Normalization {
    /// Leave words untouched.
    pub fn none() -> Self {
        Normalization {
            trim: false,
            lowercase: false,
        }
    }

    /// Apply the policy to a single word.
    pub fn apply(&self, word: &str) -> String {
        let word = if self.trim { word.trim() } else { word };
        if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}

/// An ordered vocabulary, ready to be inserted into a [`BkTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Corpus { words: Vec::new() }
    }

    /// Build a corpus from any list of words, kept verbatim.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Corpus {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Read one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Other lines are
    /// kept verbatim; call [`normalize`](Self::normalize) to clean them up.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            words.push(line);
        }

        Ok(Corpus { words })
    }

    /// Load a corpus file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open corpus file {}", path.display()))?;
        let corpus = Self::from_reader(BufReader::new(file))?;

        debug!("loaded {} words from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Apply a normalization policy to every word, dropping words that end up empty.
    pub fn normalize(&mut self, normalization: &Normalization) {
        self.words = self
            .words
            .iter()
            .map(|word| normalization.apply(word))
            .filter(|word| !word.is_empty())
            .collect();
    }

    /// Remove repeated words, keeping the first occurrence of each.
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.words.retain(|word| seen.insert(word.clone()));
    }

    /// Add a single word at the end.
    pub fn push<S: Into<String>>(&mut self, word: S) {
        self.words.push(word.into());
    }

    /// Words in corpus order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the corpus has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Insert every word, in order, into a fresh index.
    pub fn into_index(self) -> BkTree {
        let tree: BkTree = self.words.into_iter().collect();
        debug!("built index: {:?}", tree.stats());
        tree
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Corpus::from_words(iter)
    }
}

/// Vocabularies shipped with the crate.
pub struct BuiltinCorpus;

impl BuiltinCorpus {
    /// A small set of first names, handy for demos and tests.
    pub fn names() -> Corpus {
        Corpus::from_words([
            "juan",
            "wilder",
            "cristian",
            "alberto",
            "brayan",
            "daniel",
            "ernesto",
            "camilo",
            "camila",
            "felipe",
            "gabriel",
            "heinsenberg",
            "juanito",
            "john",
            "jane",
            "julia",
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalization() {
        let default = Normalization::default();
        assert_eq!(default.apply("  Juan \n"), "Juan");

        let folded = Normalization {
            trim: true,
            lowercase: true,
        };
        assert_eq!(folded.apply("  JOSÉ "), "josé");

        assert_eq!(Normalization::none().apply(" Juan "), " Juan ");
    }

    #[test]
    fn test_from_reader_skips_blank_and_comments() {
        let input = "# names\njuan\n\n   \ncamila\n# trailing comment\njohn\n";
        let corpus = Corpus::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(corpus.words(), ["juan", "camila", "john"]);
    }

    #[test]
    fn test_from_reader_keeps_lines_verbatim() {
        let corpus = Corpus::from_reader(Cursor::new("  Juan \n")).unwrap();
        assert_eq!(corpus.words(), ["  Juan "]);
    }

    #[test]
    fn test_normalize_and_dedup() {
        let mut corpus = Corpus::from_words([" Juan", "juan ", "JUAN", "camila", "  "]);
        corpus.normalize(&Normalization {
            trim: true,
            lowercase: true,
        });
        assert_eq!(corpus.len(), 4);

        corpus.dedup();
        assert_eq!(corpus.words(), ["juan", "camila"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "juan").unwrap();
        writeln!(temp_file, "# skipped").unwrap();
        writeln!(temp_file, "julia").unwrap();
        temp_file.flush().unwrap();

        let corpus = Corpus::load_from_file(temp_file.path()).unwrap();
        assert_eq!(corpus.words(), ["juan", "julia"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Corpus::load_from_file("/nonexistent/namesake/corpus.txt");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("failed to open corpus file"));
    }

    #[test]
    fn test_into_index() {
        let index = BuiltinCorpus::names().into_index();
        assert_eq!(index.len(), 16);
        assert!(index.contains("heinsenberg"));
        assert_eq!(index.search("camila", 1), vec!["camila", "camilo"]);
    }

    #[test]
    fn test_collect_and_push() {
        let mut corpus: Corpus = ["a", "b"].into_iter().collect();
        corpus.push("c");
        assert_eq!(corpus.words(), ["a", "b", "c"]);
        assert!(!corpus.is_empty());
        assert!(Corpus::new().is_empty());
    }
}
