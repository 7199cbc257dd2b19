//! Stage 4: compression metrics. Lengths are counted in chars on both sides.

use serde::Serialize;

/// Percentage of `original_len` saved, rounded and clamped to 0..=100.
pub fn savings(original_len: usize, condensed_len: usize) -> u8 {
    if original_len == 0 {
        return 0;
    }
    let ratio = (original_len as f64 - condensed_len as f64) / original_len as f64;
    (ratio.max(0.0) * 100.0).round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompressionStats {
    pub original_len: usize,
    pub condensed_len: usize,
    pub savings: u8,
}

impl CompressionStats {
    pub fn measure(original: &str, condensed: &str) -> Self {
        let original_len = original.chars().count();
        let condensed_len = condensed.chars().count();
        Self {
            original_len,
            condensed_len,
            savings: savings(original_len, condensed_len),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.condensed_len as f64 / self.original_len as f64
    }
}
