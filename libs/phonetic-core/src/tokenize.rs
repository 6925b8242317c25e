//! Word tokenizer.

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("Invalid regex"));

/// Split text into lower-cased words, where a word is a run of Unicode letters.
///
/// Digits, punctuation and whitespace only separate words.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
