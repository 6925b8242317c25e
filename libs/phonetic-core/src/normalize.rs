//! Repeat and vowel-run folding applied after the language rules.

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Collapse every run of an identical character to a single instance.
pub fn collapse_repeats(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = None;
    for ch in s.chars() {
        if last != Some(ch) {
            out.push(ch);
        }
        last = Some(ch);
    }
    out
}

/// Replace each run of vowels with the first vowel of the run.
///
/// This is a coarse nucleus reduction: `ue` becomes `u`, `ai` becomes `a`.
pub fn vowel_pass(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        let vowel = is_vowel(ch);
        if !(vowel && in_run) {
            out.push(ch);
        }
        in_run = vowel;
    }
    out
}
