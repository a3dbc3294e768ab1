// src/similarity.rs
//! Normalized string similarity between tokenized snippets, with a
//! length-based boost favouring longer functions.

use strsim::normalized_levenshtein;

/// Raw similarity ratio between two tokenized snippets, in [0, 1].
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Multiplicative boost derived from the shorter snippet's line count:
/// `1 + 0.1 * min(lines) / 10`.
#[must_use]
pub fn length_boost(lines_a: usize, lines_b: usize) -> f64 {
    let shorter = lines_a.min(lines_b) as f64;
    1.0 + 0.1 * (shorter / 10.0)
}

/// Applies the length boost to a raw ratio. The boost can push the raw
/// value past 1.0; reported scores are clamped to 1.0.
#[must_use]
pub fn adjusted(raw: f64, lines_a: usize, lines_b: usize) -> f64 {
    (raw * length_boost(lines_a, lines_b)).min(1.0)
}
