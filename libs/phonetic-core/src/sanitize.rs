//! Text cleanup ahead of the language rules.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decompose to NFD and drop every combining mark (á -> a).
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|&ch| !is_combining_mark(ch)).collect()
}

/// Restrict already lower-cased text to the alphabet the rule tables expect.
///
/// Simple punctuation is removed, `ß` becomes `ss`, and anything else that
/// is not `a-z`, `ñ`, `ç` or a space is dropped.
pub fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\'' | '\u{2019}' | '`' | '\u{b4}' | '-' | '_' | '.' => {}
            'ß' => out.push_str("ss"),
            'a'..='z' | 'ñ' | 'ç' | ' ' => out.push(ch),
            _ => {}
        }
    }
    out
}
