//! Italian rewrite rules.

use super::RuleTable;
use std::sync::LazyLock;

const RULES: &[(&str, &str)] = &[
    // clusters holding an h must resolve before mute h
    ("gli", "y"),
    ("gn", "ny"),
    ("sch([ei])", "sk${1}"),
    ("sc([ei])", "sh${1}"),
    ("ch([ei])", "k${1}"),
    ("c([ei])", "x${1}"),
    ("gh([ei])", "g${1}"),
    ("qu", "kw"),
    ("h", ""),
    // voiced and voiceless z are not told apart
    ("zz", "z"),
    ("z", "s"),
];

static TABLE: LazyLock<RuleTable> = LazyLock::new(|| RuleTable::compile(RULES));

pub fn table() -> &'static RuleTable {
    &TABLE
}
