//! French rewrite rules.

use super::RuleTable;
use std::sync::LazyLock;

const RULES: &[(&str, &str)] = &[
    // compound vowels and digraphs
    ("eau", "o"),
    (r"\bau(x)?\b", "o"),
    ("ai|ei", "e"),
    ("ou", "u"),
    ("oi", "wa"),
    ("ch", "sh"),
    ("gn", "ny"),
    ("qu", "k"),
    ("h", ""),
    ("ç", "s"),
    // common silent endings
    (r"[stdxp]\b", ""),
    (r"ille\b", "iy"),
];

static TABLE: LazyLock<RuleTable> = LazyLock::new(|| RuleTable::compile(RULES));

pub fn table() -> &'static RuleTable {
    &TABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_rules;
    use pretty_assertions::assert_eq;

    fn rewrite(s: &str) -> String {
        apply_rules(s, table())
    }

    #[test]
    fn test_vowel_clusters() {
        assert_eq!(rewrite("eau"), "o");
        assert_eq!(rewrite("au"), "o");
        assert_eq!(rewrite("aux"), "o");
        assert_eq!(rewrite("maison"), "meson");
        assert_eq!(rewrite("neige"), "nege");
        assert_eq!(rewrite("nous"), "nu");
        assert_eq!(rewrite("roi"), "rwa");
    }

    #[test]
    fn test_au_only_as_whole_word() {
        assert_eq!(rewrite("autre"), "autre");
        assert_eq!(rewrite("beaux"), "bo");
    }

    #[test]
    fn test_consonant_digraphs() {
        // sh does not survive the mute h rule
        assert_eq!(rewrite("chat"), "sa");
        assert_eq!(rewrite("agneau"), "anyo");
        assert_eq!(rewrite("quatre"), "katre");
    }

    #[test]
    fn test_mute_h_and_cedilla() {
        assert_eq!(rewrite("homme"), "omme");
        assert_eq!(rewrite("façade"), "fasade");
    }

    #[test]
    fn test_silent_endings() {
        assert_eq!(rewrite("grand"), "gran");
        assert_eq!(rewrite("petit"), "peti");
        assert_eq!(rewrite("beaucoup"), "bocu");
        assert_eq!(rewrite("fille"), "fiy");
    }
}
