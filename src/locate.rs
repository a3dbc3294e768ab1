// src/locate.rs
//! Best-effort mapping from a snippet back to a 1-based line number in the
//! file it came from. The snippet's first line is matched by substring
//! containment against the already-loaded file content; duplicate or
//! reformatted first lines can resolve to the wrong line or to nothing.

/// Returns the 1-based number of the first content line containing the
/// snippet's first line verbatim, or `None` when no line matches (for
/// example because preprocessing rewrote the signature line).
#[must_use]
pub fn first_line_number(snippet: &str, content: &str) -> Option<usize> {
    let needle = snippet.trim().lines().next()?;
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_first_line() {
        let content = "import os\n\ndef handler(req):\n    return req\n";
        let snippet = "def handler(req):\n    return req\n";
        assert_eq!(first_line_number(snippet, content), Some(3));
    }

    #[test]
    fn missing_first_line_resolves_to_none() {
        let content = "def other():\n    pass\n";
        assert_eq!(first_line_number("def handler(req):", content), None);
    }

    #[test]
    fn empty_snippet_resolves_to_none() {
        assert_eq!(first_line_number("   \n", "def f():\n"), None);
    }

    #[test]
    fn first_of_duplicate_lines_wins() {
        let content = "def twin():\n    pass\ndef twin():\n    pass\n";
        assert_eq!(first_line_number("def twin():", content), Some(1));
    }
}
