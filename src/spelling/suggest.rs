//! Suggestion generation on top of the BK-tree.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{NamesakeError, Result};
use crate::spelling::bk_tree::{BkTree, Match};
use crate::spelling::dictionary::{Corpus, Normalization};

/// A suggested word and how far it is from the input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Edit distance from the normalized input.
    pub distance: usize,
    /// The suggested word.
    pub word: String,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(word: S, distance: usize) -> Self {
        Suggestion {
            distance,
            word: word.into(),
        }
    }
}

impl From<Match<'_>> for Suggestion {
    fn from(m: Match<'_>) -> Self {
        Suggestion::new(m.word, m.distance)
    }
}

/// Configuration for suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum edit distance to consider. Negative values disable matching.
    pub max_distance: i64,
    /// Maximum number of suggestions to return (`None` for all).
    pub max_suggestions: Option<usize>,
    /// Cleanup applied to the corpus and to every input.
    pub normalization: Normalization,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_distance: 2,
            max_suggestions: None,
            normalization: Normalization::default(),
        }
    }
}

/// Suggests likely-intended words for a possibly misspelled input.
///
/// The engine owns its index; there is no process-wide vocabulary.
///
/// ```
/// use namesake::spelling::{BuiltinCorpus, SuggestionConfig, SuggestionEngine};
///
/// let engine = SuggestionEngine::from_corpus(BuiltinCorpus::names(), SuggestionConfig::default());
/// let suggestions = engine.suggest("jhon").unwrap();
/// assert!(suggestions.iter().any(|s| s.word == "john"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    index: BkTree,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new engine over an already built index.
    pub fn new(index: BkTree) -> Self {
        SuggestionEngine {
            index,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new engine with custom configuration.
    pub fn with_config(index: BkTree, config: SuggestionConfig) -> Self {
        SuggestionEngine { index, config }
    }

    /// Normalize and deduplicate a corpus with the config's policy, then index it.
    pub fn from_corpus(mut corpus: Corpus, config: SuggestionConfig) -> Self {
        corpus.normalize(&config.normalization);
        corpus.dedup();
        debug!("indexing {} distinct words", corpus.len());

        SuggestionEngine {
            index: corpus.into_index(),
            config,
        }
    }

    /// Update the configuration.
    ///
    /// Words already in the index are not re-normalized.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.config = config;
    }

    /// Current configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// The underlying index.
    pub fn index(&self) -> &BkTree {
        &self.index
    }

    /// Normalize and insert a word unless it is empty or already known.
    ///
    /// Returns whether the word was inserted.
    pub fn add_word(&mut self, word: &str) -> bool {
        let word = self.config.normalization.apply(word);
        if word.is_empty() || self.index.contains(&word) {
            return false;
        }
        self.index.add(word);
        true
    }

    /// Suggestions within the configured maximum distance.
    pub fn suggest(&self, input: &str) -> Result<Vec<Suggestion>> {
        self.suggest_within(input, self.config.max_distance)
    }

    /// Suggestions within an explicit maximum distance.
    ///
    /// Fails with [`NamesakeError::InvalidInput`] when the input is empty
    /// after normalization. An empty list is a normal outcome.
    pub fn suggest_within(&self, input: &str, max_distance: i64) -> Result<Vec<Suggestion>> {
        let query = self.config.normalization.apply(input);
        if query.is_empty() {
            return Err(NamesakeError::invalid_input("no input to suggest for"));
        }

        let mut suggestions: Vec<Suggestion> = self
            .index
            .search_with_distance(&query, max_distance)
            .into_iter()
            .map(Suggestion::from)
            .collect();

        if let Some(limit) = self.config.max_suggestions {
            suggestions.truncate(limit);
        }

        debug!(
            "{} suggestion(s) for {:?} within {}",
            suggestions.len(),
            query,
            max_distance
        );
        Ok(suggestions)
    }

    /// Whether the normalized word is in the index.
    pub fn is_known(&self, word: &str) -> bool {
        self.index.contains(&self.config.normalization.apply(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::BuiltinCorpus;

    fn engine() -> SuggestionEngine {
        SuggestionEngine::from_corpus(BuiltinCorpus::names(), SuggestionConfig::default())
    }

    #[test]
    fn test_suggestion_ordering() {
        let mut suggestions = vec![
            Suggestion::new("julia", 3),
            Suggestion::new("john", 2),
            Suggestion::new("juan", 0),
            Suggestion::new("jane", 2),
        ];
        suggestions.sort();

        let words: Vec<_> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["juan", "jane", "john", "julia"]);
    }

    #[test]
    fn test_suggest_misspelled_name() {
        let suggestions = engine().suggest("jhon").unwrap();
        assert!(suggestions.contains(&Suggestion::new("john", 2)));
        assert!(suggestions.iter().all(|s| s.distance <= 2));
    }

    #[test]
    fn test_suggest_known_name_comes_first() {
        let suggestions = engine().suggest("camila").unwrap();
        assert_eq!(suggestions[0], Suggestion::new("camila", 0));
        assert_eq!(suggestions[1], Suggestion::new("camilo", 1));
    }

    #[test]
    fn test_suggest_trims_input() {
        let suggestions = engine().suggest_within("  camila\t", 0).unwrap();
        assert_eq!(suggestions, vec![Suggestion::new("camila", 0)]);
    }

    #[test]
    fn test_blank_input_is_invalid() {
        let result = engine().suggest("   ");
        assert!(matches!(result, Err(NamesakeError::InvalidInput(_))));
    }

    #[test]
    fn test_no_suggestions_is_not_an_error() {
        let suggestions = engine().suggest("zzzzzzzzzzzz").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_negative_distance_yields_nothing() {
        let suggestions = engine().suggest_within("juan", -1).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_max_suggestions() {
        let config = SuggestionConfig {
            max_distance: 3,
            max_suggestions: Some(2),
            ..Default::default()
        };
        let engine = SuggestionEngine::from_corpus(BuiltinCorpus::names(), config);

        let suggestions = engine.suggest("juan").unwrap();
        assert_eq!(
            suggestions,
            vec![Suggestion::new("juan", 0), Suggestion::new("jane", 2)]
        );
    }

    #[test]
    fn test_lowercase_policy_applies_to_corpus_and_input() {
        let config = SuggestionConfig {
            normalization: Normalization {
                trim: true,
                lowercase: true,
            },
            ..Default::default()
        };
        let corpus = Corpus::from_words(["Juan", "JUAN", "Camila"]);
        let engine = SuggestionEngine::from_corpus(corpus, config);

        assert_eq!(engine.index().len(), 2);
        assert!(engine.is_known("CAMILA"));
        let suggestions = engine.suggest_within("JUAN", 0).unwrap();
        assert_eq!(suggestions, vec![Suggestion::new("juan", 0)]);
    }

    #[test]
    fn test_add_word() {
        let mut engine = engine();
        assert!(engine.add_word(" jhonny "));
        assert!(!engine.add_word("jhonny"));
        assert!(!engine.add_word("   "));
        assert!(engine.is_known("jhonny"));
        assert_eq!(engine.index().len(), 17);
    }

    #[test]
    fn test_set_config() {
        let mut engine = engine();
        engine.set_config(SuggestionConfig {
            max_distance: 0,
            ..Default::default()
        });
        assert_eq!(engine.config().max_distance, 0);
        assert!(engine.suggest("jhon").unwrap().is_empty());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SuggestionConfig = serde_json::from_str(r#"{"max_distance": 1}"#).unwrap();
        assert_eq!(config.max_distance, 1);
        assert_eq!(config.max_suggestions, None);
        assert_eq!(config.normalization, Normalization::default());
    }
}
