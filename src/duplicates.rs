// src/duplicates.rs
//! Pairwise duplicate search across the functions extracted from one file.

use crate::locate;
use crate::similarity;
use crate::tokenize::tokenize;
use crate::types::{DuplicatePair, FunctionSnippet, SnippetLoc, SourceFile};

/// Compares every unordered pair (i < j) of functions and keeps those whose
/// adjusted similarity meets the threshold. O(n²) tokenizations per file;
/// each snippet is re-tokenized for every pair it participates in.
#[must_use]
pub fn find_duplicates_in_file(
    source: &SourceFile,
    functions: &[FunctionSnippet],
    threshold: f64,
) -> Vec<DuplicatePair> {
    let mut pairs = Vec::new();

    for (i, first) in functions.iter().enumerate() {
        for second in functions.iter().skip(i + 1) {
            let raw = similarity::ratio(&tokenize(&first.text), &tokenize(&second.text));
            let score = similarity::adjusted(raw, first.line_count(), second.line_count());

            if score >= threshold {
                pairs.push(DuplicatePair {
                    path: source.path.clone(),
                    first: resolve(first, source),
                    second: resolve(second, source),
                    score,
                });
            }
        }
    }

    pairs
}

fn resolve(snippet: &FunctionSnippet, source: &SourceFile) -> SnippetLoc {
    SnippetLoc {
        text: snippet.text.clone(),
        line: locate::first_line_number(&snippet.text, &source.content),
    }
}
