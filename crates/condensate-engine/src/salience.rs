//! Stage 3: salience filter.

use crate::tokenizer;
use condensate_core::{Vocabulary, FALLBACK_SUMMARY};
use regex::Regex;
use std::sync::LazyLock;

static RE_SPEAKER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*:").unwrap());

/// Binary test: does the line contain any salience marker?
pub fn is_salient(line: &str, vocab: &Vocabulary) -> bool {
    let lower = line.to_lowercase();
    vocab.salience_markers().iter().any(|m| lower.contains(m.as_str()))
}

/// Remove a leading `LABEL:` prefix and surrounding whitespace.
///
/// A label starts with a letter, so clock times like `10:30` survive, and a
/// colon followed by `//` is a URL scheme rather than a speaker.
pub fn strip_speaker_label(line: &str) -> &str {
    let line = line.trim();
    match RE_SPEAKER_LABEL.find(line) {
        Some(m) if !line[m.end()..].starts_with("//") => line[m.end()..].trim(),
        _ => line,
    }
}

/// Salient lines in document order, labels stripped.
pub fn filter(text: &str, vocab: &Vocabulary) -> Vec<String> {
    tokenizer::lines(text)
        .into_iter()
        .filter(|l| is_salient(l, vocab))
        .map(|l| strip_speaker_label(l).to_string())
        .collect()
}

/// Join salient lines into prose, or the fallback sentence when there are none.
pub fn join(lines: &[String]) -> String {
    if lines.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        lines.join(". ")
    }
}
