// src/extract.rs
//! Heuristic function boundary detection. A snippet runs from one `def`
//! marker to the next marker or end of text, so trailing blank lines and
//! comments ahead of the next definition are swallowed. Nested or
//! syntactically unusual definitions can be mis-split; this is pattern
//! matching, not parsing.

use crate::types::FunctionSnippet;
use regex::Regex;
use std::sync::LazyLock;

// A marker is a signature line reaching a closing `):`; a `def` whose
// parameter list never closes does not start a snippet.
static DEF_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*def\s+\w+\([\s\S]*?\):").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Splits preprocessed text into function snippets in source order.
/// A file with no markers yields an empty vector.
#[must_use]
pub fn extract_functions(content: &str) -> Vec<FunctionSnippet> {
    let starts: Vec<usize> = DEF_MARKER_RE
        .find_iter(content)
        .map(|m| m.start())
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(idx, &start)| {
            let end = starts.get(idx + 1).copied().unwrap_or(content.len());
            FunctionSnippet::new(&content[start..end])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_def_markers() {
        let content = "def a():\n    return 1\ndef b():\n    return 2\n";
        let functions = extract_functions(content);
        assert_eq!(functions.len(), 2);
        assert!(functions[0].text.starts_with("def a()"));
        assert!(functions[1].text.starts_with("def b()"));
    }

    #[test]
    fn last_snippet_runs_to_end_of_text() {
        let content = "x = 1\ndef only():\n    return x\n";
        let functions = extract_functions(content);
        assert_eq!(functions.len(), 1);
        assert!(functions[0].text.ends_with("return x\n"));
    }

    #[test]
    fn indented_methods_are_captured() {
        let content = "class C:\n    def m(self):\n        pass\n";
        let functions = extract_functions(content);
        assert_eq!(functions.len(), 1);
        assert!(functions[0].text.contains("def m(self)"));
    }

    #[test]
    fn no_markers_yields_empty_sequence() {
        assert!(extract_functions("x = 1\ny = 2\n").is_empty());
        assert!(extract_functions("").is_empty());
    }

    #[test]
    fn unterminated_signature_is_not_a_marker() {
        assert!(extract_functions("def broken(\n    pass\n").is_empty());
    }

    #[test]
    fn multiline_signatures_still_start_a_snippet() {
        let content = "def long(a,\n         b):\n    return a\n";
        let functions = extract_functions(content);
        assert_eq!(functions.len(), 1);
        assert!(functions[0].text.starts_with("def long(a,"));
    }
}
