// src/preprocess.rs
//! Text normalization applied before function extraction. Pure transforms;
//! the whitespace-collapsing rules are idempotent.

use regex::Regex;
use std::sync::LazyLock;

/// Placeholder substituted for HTTP method keywords so that handlers
/// differing only in the verb compare as structurally equal.
pub const HTTP_METHOD_PLACEHOLDER: &str = "HTTP_METHOD";

static HTTP_METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(GET|POST|PUT|DELETE|PATCH|OPTIONS|HEAD)\b")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

static ASSERT_MESSAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"assert .*?, ".*?""#).unwrap_or_else(|_| panic!("Invalid Regex")));

static HORIZONTAL_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").unwrap_or_else(|_| panic!("Invalid Regex")));

static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Normalizes raw file text for comparison: trims the ends, collapses HTTP
/// method keywords to a placeholder, drops assertion message strings,
/// collapses runs of spaces/tabs to one space and runs of blank lines to a
/// single newline.
#[must_use]
pub fn preprocess(content: &str) -> String {
    let content = content.trim();
    let content = HTTP_METHOD_RE.replace_all(content, HTTP_METHOD_PLACEHOLDER);
    let content = ASSERT_MESSAGE_RE.replace_all(&content, "assert");
    let content = HORIZONTAL_WS_RE.replace_all(&content, " ");
    let content = BLANK_LINES_RE.replace_all(&content, "\n");
    content.into_owned()
}
