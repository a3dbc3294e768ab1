// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

/// A source file read once per scan; the content is held only for the
/// duration of that file's duplicate search.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

/// A substring of preprocessed source text spanning one function definition,
/// including its signature line. Never mutated after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSnippet {
    pub text: String,
}

impl FunctionSnippet {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Number of lines in the snippet, as captured (trailing blank lines
    /// swallowed by lazy extraction count too).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Snippet text with surrounding whitespace removed, for display.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// A snippet plus its resolved 1-based starting line, when the first line
/// could be located in the raw file content.
#[derive(Debug, Clone, Serialize)]
pub struct SnippetLoc {
    pub text: String,
    pub line: Option<usize>,
}

/// Two snippets from the same file whose adjusted similarity met the
/// threshold. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicatePair {
    pub path: PathBuf,
    pub first: SnippetLoc,
    pub second: SnippetLoc,
    pub score: f64,
}

impl DuplicatePair {
    /// Similarity rendered as a percentage with two decimals.
    #[must_use]
    pub fn percent(&self) -> String {
        format!("{:.2}%", self.score * 100.0)
    }
}

/// Aggregated results for one run, in file order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub pairs: Vec<DuplicatePair>,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    /// Returns true if any duplicate pairs were found.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.pairs.is_empty()
    }

    /// Returns the number of duplicate pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}
