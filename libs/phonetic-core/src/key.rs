//! Phonetic key builder.
//!
//! A key is built fresh on every call:
//! lower-case, strip diacritics, sanitize, apply the language rules,
//! collapse repeats, fold vowel runs, collapse repeats again.

use crate::error::Result;
use crate::normalize::{collapse_repeats, vowel_pass};
use crate::rules::apply_rules;
use crate::sanitize::{sanitize, strip_diacritics};
use crate::types::Language;

/// Reduce a word to its phonetic key for `lang`.
///
/// Empty input yields an empty key.
pub fn phonetic_key(word: &str, lang: Language) -> String {
    if word.is_empty() {
        return String::new();
    }

    let s = strip_diacritics(&word.to_lowercase());
    let s = sanitize(&s);
    let s = apply_rules(&s, lang.rules());
    let s = collapse_repeats(&s);
    let s = vowel_pass(&s);
    let key = collapse_repeats(&s);

    tracing::trace!(word, lang = %lang, key = %key, "phonetic key");
    key
}

/// Same as [`phonetic_key`], for a language given as an external code.
///
/// Fails with `UnsupportedLanguage` when `code` is not one of `es`, `en`,
/// `fr`, `it`.
pub fn phonetic_key_by_code(word: &str, code: &str) -> Result<String> {
    let lang: Language = code.parse()?;
    Ok(phonetic_key(word, lang))
}
