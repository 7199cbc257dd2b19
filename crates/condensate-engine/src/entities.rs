//! Stage 2: entity extraction.
//!
//! Four passes over the raw text feed one insertion-ordered set: version
//! tags, time expressions, capitalized words that are not stop words, and
//! technical vocabulary terms. Nothing is removed once added, so `API`
//! (vocabulary pass, lowercased to `api`) and a verbatim `Api` can coexist.

use crate::trace::TraceLog;
use condensate_core::{EntityBounds, EntityKind, TypedEntity, Vocabulary};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)v[0-9]+\.[0-9]+(?:\.[0-9]+)?").unwrap());
static RE_VERSION_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^v[0-9]+\.[0-9]+(?:\.[0-9]+)?$").unwrap());
static RE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[0-9]+\s?(?:am|pm)").unwrap());
static RE_CAPITALIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+\b").unwrap());
static RE_CODE_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[{}()\[\]"\\=@#<>]"#).unwrap());

/// Confidence attached to heuristically typed entities.
pub const HEURISTIC_CONFIDENCE: f64 = 0.8;

/// Set with exact-string dedup that remembers first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl EntitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the entity was already present.
    pub fn insert(&mut self, entity: &str) -> bool {
        if self.seen.contains(entity) {
            return false;
        }
        self.seen.insert(entity.to_string());
        self.order.push(entity.to_string());
        true
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.seen.contains(entity)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        let seen = &mut self.seen;
        self.order.retain(|e| {
            let k = keep(e.as_str());
            if !k {
                seen.remove(e.as_str());
            }
            k
        });
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// Version tags such as `v2.0` or `V1.2.3`, verbatim.
pub fn versions(text: &str) -> impl Iterator<Item = &str> {
    RE_VERSION.find_iter(text).map(|m| m.as_str())
}

/// Time expressions such as `2 PM` or `10am`, verbatim.
pub fn times(text: &str) -> impl Iterator<Item = &str> {
    RE_TIME.find_iter(text).map(|m| m.as_str())
}

/// Capitalized words whose lowercase form is not a stop word.
pub fn proper_words<'t>(text: &'t str, vocab: &Vocabulary) -> Vec<&'t str> {
    RE_CAPITALIZED
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| !vocab.is_stop_word(w))
        .collect()
}

/// Vocabulary terms occurring anywhere in the text, case-insensitively.
pub fn vocabulary_terms<'v>(text: &str, vocab: &'v Vocabulary) -> Vec<&'v str> {
    let lower = text.to_lowercase();
    vocab
        .tech_terms()
        .iter()
        .filter(|t| lower.contains(t.as_str()))
        .map(String::as_str)
        .collect()
}

/// Run all four passes in order.
pub fn extract(text: &str, vocab: &Vocabulary) -> EntitySet {
    let mut set = EntitySet::new();
    for v in versions(text) {
        set.insert(v);
    }
    for t in times(text) {
        set.insert(t);
    }
    for w in proper_words(text, vocab) {
        set.insert(w);
    }
    for term in vocabulary_terms(text, vocab) {
        set.insert(term);
    }
    set
}

/// Drop entities outside `bounds`. Vocabulary terms are exempt from the length floor.
pub fn bound(set: &mut EntitySet, bounds: &EntityBounds, vocab: &Vocabulary) {
    if bounds.is_unbounded() {
        return;
    }
    set.retain(|e| {
        if bounds.reject_code_noise && RE_CODE_NOISE.is_match(e) {
            return false;
        }
        e.chars().count() >= bounds.min_length || vocab.is_tech_term(e)
    });
}

/// Extract, bound, and record the entity count in the trace.
pub fn extract_traced(
    text: &str,
    vocab: &Vocabulary,
    bounds: &EntityBounds,
    trace: &mut TraceLog<'_>,
) -> Vec<String> {
    let mut set = extract(text, vocab);
    bound(&mut set, bounds, vocab);
    tracing::debug!(count = set.len(), "entity scan finished");
    trace.success(format!("Extracted {} unique entities", set.len()));
    set.into_vec()
}

/// Heuristic kind for each entity: version tags and API/auth mentions are
/// artifacts, vocabulary terms are tools, the rest are concepts.
pub fn annotate(entities: &[String], vocab: &Vocabulary) -> Vec<TypedEntity> {
    entities
        .iter()
        .map(|name| {
            let lower = name.to_lowercase();
            let kind = if RE_VERSION_EXACT.is_match(name) || lower.contains("api") || lower.contains("auth") {
                EntityKind::Artifact
            } else if vocab.is_tech_term(&lower) {
                EntityKind::Tool
            } else {
                EntityKind::Concept
            };
            TypedEntity { name: name.clone(), kind, confidence: HEURISTIC_CONFIDENCE }
        })
        .collect()
}
