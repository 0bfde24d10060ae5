// src/text.rs
//! Text normalization: strips everything but ASCII letters and splits on whitespace.

use regex::Regex;
use std::sync::LazyLock;

const NON_LETTER_PATTERN: &str = "[^a-zA-Z]";

static NON_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NON_LETTER_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Replaces every non-letter with a space and splits on whitespace runs,
/// preserving the original letter case.
#[must_use]
pub fn tokenize_preserving_case(text: &str) -> Vec<String> {
    NON_LETTER_RE
        .replace_all(text, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Tokenizes `text` into lowercase words suitable for graph storage.
#[must_use]
pub fn normalize(text: &str) -> Vec<String> {
    tokenize_preserving_case(text)
        .into_iter()
        .map(|t| t.to_ascii_lowercase())
        .collect()
}

/// Lowercases a single query word without stripping anything else.
///
/// Query words are looked up as given; a word with digits or punctuation
/// simply will not be found.
#[must_use]
pub fn fold(word: &str) -> String {
    word.to_lowercase()
}
