//! Static word lists consulted by the condenser.

use crate::config::VocabularyConfig;
use crate::error::{CondensateError, Result};
use std::collections::HashSet;

const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "and", "a", "an",
    "hey", "hello", "sure", "okay", "don't", "forget",
];

const TECH_TERMS: &[&str] = &[
    "v2.0", "v2.3", "api", "auth", "refactoring", "migration", "bottleneck",
    "investors", "roadmap", "q3", "backend", "frontend", "latency",
];

const SALIENCE_MARKERS: &[&str] = &["need to", "prioritize", "focus on", "meeting", "bottleneck"];

/// Immutable stop words, technical terms and salience markers.
///
/// Technical terms and markers keep their declaration order so that the
/// extractor's output order is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    stop_words: HashSet<String>,
    tech_terms: Vec<String>,
    salience_markers: Vec<String>,
}

impl Vocabulary {
    pub fn builtin() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            tech_terms: TECH_TERMS.iter().map(|s| s.to_string()).collect(),
            salience_markers: SALIENCE_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in lists extended with the configured extras, then validated.
    pub fn from_config(config: &VocabularyConfig) -> Result<Self> {
        let vocab = Self::builtin()
            .with_stop_words(config.extra_stop_words.iter().cloned())
            .with_tech_terms(config.extra_tech_terms.iter().cloned())
            .with_salience_markers(config.extra_salience_markers.iter().cloned());
        vocab.validate()?;
        Ok(vocab)
    }

    /// Stop words are matched against lowercased words, so they are stored lowercased.
    pub fn with_stop_words(mut self, words: impl IntoIterator<Item = String>) -> Self {
        self.stop_words.extend(words.into_iter().map(|w| w.trim().to_lowercase()));
        self
    }

    /// Terms and markers are trimmed; case is left for `validate` to check.
    pub fn with_tech_terms(mut self, terms: impl IntoIterator<Item = String>) -> Self {
        for term in terms.into_iter().map(|t| t.trim().to_string()) {
            if !self.tech_terms.contains(&term) {
                self.tech_terms.push(term);
            }
        }
        self
    }

    pub fn with_salience_markers(mut self, markers: impl IntoIterator<Item = String>) -> Self {
        for marker in markers.into_iter().map(|m| m.trim().to_string()) {
            if !self.salience_markers.contains(&marker) {
                self.salience_markers.push(marker);
            }
        }
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    pub fn is_tech_term(&self, word: &str) -> bool {
        self.tech_terms.iter().any(|t| t == word)
    }

    pub fn tech_terms(&self) -> &[String] {
        &self.tech_terms
    }

    pub fn salience_markers(&self) -> &[String] {
        &self.salience_markers
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Terms and markers are compared against lowercased text, so they must be
    /// non-blank and already lowercase.
    pub fn validate(&self) -> Result<()> {
        if self.stop_words.iter().any(|w| w.is_empty()) {
            return Err(CondensateError::InvalidVocabulary("blank stop word".into()));
        }
        for term in &self.tech_terms {
            if term.trim().is_empty() {
                return Err(CondensateError::InvalidVocabulary("blank technical term".into()));
            }
            if term.to_lowercase() != *term {
                return Err(CondensateError::InvalidVocabulary(format!(
                    "technical term must be lowercase: {term}"
                )));
            }
        }
        for marker in &self.salience_markers {
            if marker.trim().is_empty() {
                return Err(CondensateError::InvalidVocabulary("blank salience marker".into()));
            }
            if marker.to_lowercase() != *marker {
                return Err(CondensateError::InvalidVocabulary(format!(
                    "salience marker must be lowercase: {marker}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
