//! Text normalization shared by the field comparison strategies.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of whitespace, hyphens, and underscores collapse to one space, so
/// "Series-A" and "series  a" compare equal.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_]+").unwrap());

/// Case-fold, trim, and collapse separators.
pub fn normalize(text: &str) -> String {
    SEPARATOR_RE
        .replace_all(text.trim(), " ")
        .to_lowercase()
}

/// Whether a string field counts as present: non-empty after trimming.
pub fn is_present(text: &str) -> bool {
    !text.trim().is_empty()
}
