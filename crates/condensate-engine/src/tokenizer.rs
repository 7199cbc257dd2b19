//! Stage 1: whitespace tokens and non-empty lines.

/// Whitespace-separated tokens.
pub fn tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Lines that are not blank after trimming, untrimmed and in document order.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.trim().is_empty()).collect()
}

/// Size summary of an input block, logged once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenStats {
    pub tokens: usize,
    pub lines: usize,
    pub chars: usize,
}

pub fn stats(text: &str) -> TokenStats {
    TokenStats {
        tokens: text.split_whitespace().count(),
        lines: text.lines().filter(|l| !l.trim().is_empty()).count(),
        chars: text.chars().count(),
    }
}
