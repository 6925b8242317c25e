//! Ordered orthographic rewrite rules.
//!
//! Each language owns a fixed table of `(pattern, replacement)` pairs. The
//! interpreter applies them in table order, every rule rewriting all
//! non-overlapping matches of the current string before the next rule runs.
//! Order encodes precedence: digraphs come before the single letters they
//! contain.
//!
//! The tables aim at tolerant search keys, not at an IPA transcription.

pub mod en;
pub mod es;
pub mod fr;
pub mod it;

use regex::Regex;

/// A single compiled rewrite rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    /// Compile a rule from its source pattern.
    ///
    /// Only called on the built-in constant tables, which are exercised by
    /// the test suite.
    fn compile(pattern: &'static str, replacement: &'static str) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid rule pattern {pattern:?}: {e}"));
        Self {
            pattern,
            replacement,
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Rewrite every match of this rule in `input`.
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement)
            .into_owned()
    }
}

/// An immutable, ordered list of rules for one language.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub(crate) fn compile(source: &[(&'static str, &'static str)]) -> Self {
        Self {
            rules: source
                .iter()
                .map(|&(pattern, replacement)| Rule::compile(pattern, replacement))
                .collect(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run every rule of `table` over `text`, in order.
pub fn apply_rules(text: &str, table: &RuleTable) -> String {
    table
        .rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
