// src/tokenize.rs
//! Reduces a function snippet to a space-joined stream of identifier and
//! operator tokens. Comment, docstring and string-literal content never
//! reaches the stream, so functions differing only in literals compare as
//! structurally equal. This is a lossy projection on purpose.

use regex::Regex;
use std::sync::LazyLock;

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""""[\s\S]*?"""|'''[\s\S]*?'''|"[^"\n]*"|'[^'\n]*'|#.*"#)
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z_]\w*|==|!=|<=|>=|<|>|=|\+|-|\*|/|%|\(|\)|\[|\]|\{|\}")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Tokenizes a snippet into a single normalized line. Pure; the same input
/// always yields the same output.
#[must_use]
pub fn tokenize(snippet: &str) -> String {
    let stripped = STRIP_RE.replace_all(snippet, "");
    TOKEN_RE
        .find_iter(&stripped)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
