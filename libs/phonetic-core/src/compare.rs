//! Phonetic similarity between two free-text strings.

use crate::error::Result;
use crate::key::phonetic_key;
use crate::tokenize::tokenize;
use crate::types::{CompareMode, CompareOptions, Language};
use serde::Serialize;
use std::collections::HashMap;

/// Result of comparing two texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Similarity score between 0.0 and 100.0, two decimal places.
    pub score: f64,
    /// Non-empty phonetic keys of the first text, in word order.
    pub keys_a: Vec<String>,
    /// Non-empty phonetic keys of the second text, in word order.
    pub keys_b: Vec<String>,
}

/// Phonetic keys for every word of `text`, empty keys discarded.
pub fn keys_per_word(text: &str, lang: Language) -> Vec<String> {
    tokenize(text)
        .iter()
        .map(|word| phonetic_key(word, lang))
        .filter(|key| !key.is_empty())
        .collect()
}

/// Compare two texts and return the score together with the keys it was computed from.
pub fn compare(a: &str, b: &str, lang: Language, options: CompareOptions) -> Comparison {
    let keys_a = keys_per_word(a, lang);
    let keys_b = keys_per_word(b, lang);
    let score = score_keys(&keys_a, &keys_b, options);

    tracing::debug!(
        lang = %lang,
        mode = %options.mode,
        order_matters = options.order_matters,
        words_a = keys_a.len(),
        words_b = keys_b.len(),
        score,
        "phonetic comparison"
    );

    Comparison {
        score,
        keys_a,
        keys_b,
    }
}

/// Similarity of two texts in `[0, 100]`, rounded to two decimals.
pub fn compare_phonetic(a: &str, b: &str, lang: Language, options: CompareOptions) -> f64 {
    compare(a, b, lang, options).score
}

/// Same as [`compare_phonetic`], with language and mode given as external codes.
///
/// Fails with `UnsupportedLanguage` or `UnsupportedMode` for unknown codes.
pub fn compare_phonetic_by_code(
    a: &str,
    b: &str,
    code: &str,
    mode: &str,
    order_matters: bool,
) -> Result<f64> {
    let lang: Language = code.parse()?;
    let mode: CompareMode = mode.parse()?;
    Ok(compare_phonetic(a, b, lang, CompareOptions::new(mode, order_matters)))
}

/// Score two key sequences.
pub fn score_keys(keys_a: &[String], keys_b: &[String], options: CompareOptions) -> f64 {
    if keys_a.is_empty() && keys_b.is_empty() {
        tracing::trace!("both sides empty");
        return 100.0;
    }
    match options.mode {
        CompareMode::AInB if keys_a.is_empty() => return 0.0,
        CompareMode::BInA if keys_b.is_empty() => return 0.0,
        _ => {}
    }

    let ratio = if options.order_matters {
        positional_ratio(keys_a, keys_b, options.mode)
    } else {
        multiset_ratio(keys_a, keys_b, options.mode)
    };
    round2(ratio * 100.0)
}

/// Index-aligned comparison. A length mismatch counts against `Total`.
fn positional_ratio(keys_a: &[String], keys_b: &[String], mode: CompareMode) -> f64 {
    let matches = keys_a
        .iter()
        .zip(keys_b)
        .filter(|(a, b)| a == b)
        .count() as f64;

    match mode {
        CompareMode::Total => matches / keys_a.len().max(keys_b.len()) as f64,
        CompareMode::AInB => matches / keys_a.len() as f64,
        CompareMode::BInA => matches / keys_b.len() as f64,
    }
}

/// Bag-of-words comparison over key counts.
fn multiset_ratio(keys_a: &[String], keys_b: &[String], mode: CompareMode) -> f64 {
    let ms_a = MultiSet::from_keys(keys_a);
    let ms_b = MultiSet::from_keys(keys_b);
    let inter = ms_a.intersection_size(&ms_b) as f64;

    match mode {
        CompareMode::Total => {
            let union = ms_a.union_size(&ms_b);
            if union == 0 {
                0.0
            } else {
                inter / union as f64
            }
        }
        CompareMode::AInB => inter / keys_a.len() as f64,
        CompareMode::BInA => inter / keys_b.len() as f64,
    }
}

/// Key -> occurrence count.
#[derive(Debug)]
struct MultiSet<'a> {
    counts: HashMap<&'a str, usize>,
}

impl<'a> MultiSet<'a> {
    fn from_keys(keys: &'a [String]) -> Self {
        let mut counts = HashMap::new();
        for key in keys {
            *counts.entry(key.as_str()).or_insert(0) += 1;
        }
        Self { counts }
    }

    fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of the smaller count for every key.
    fn intersection_size(&self, other: &Self) -> usize {
        self.counts
            .iter()
            .map(|(key, &count)| count.min(other.count(key)))
            .sum()
    }

    /// Sum of the larger count for every key on either side.
    fn union_size(&self, other: &Self) -> usize {
        let only_other: usize = other
            .counts
            .iter()
            .filter(|(key, _)| !self.counts.contains_key(*key))
            .map(|(_, &count)| count)
            .sum();
        let shared_or_mine: usize = self
            .counts
            .iter()
            .map(|(key, &count)| count.max(other.count(key)))
            .sum();
        shared_or_mine + only_other
    }
}

/// Round half away from zero to two decimals.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
