//! Locale-aware phonetic keys and fuzzy text matching.
//!
//! Provides:
//! - Phonetic keys for Spanish, English, French and Italian words
//! - Ordered per-language rewrite tables with a single interpreter
//! - Word tokenizer and bag-of-words / positional similarity scoring
//! - Shared types (Language, CompareMode, CompareOptions)
//!
//! ```
//! use phonetic_core::{compare_phonetic, phonetic_key, CompareOptions, Language};
//!
//! assert_eq!(phonetic_key("phone", Language::En), phonetic_key("fone", Language::En));
//!
//! let score = compare_phonetic(
//!     "Nueva cerveza helada",
//!     "Nueba servesa elada",
//!     Language::Es,
//!     CompareOptions::default(),
//! );
//! assert_eq!(score, 100.0);
//! ```

pub mod compare;
pub mod error;
pub mod key;
pub mod normalize;
pub mod rules;
pub mod sanitize;
pub mod tokenize;
pub mod types;

pub use compare::{
    compare, compare_phonetic, compare_phonetic_by_code, keys_per_word, Comparison,
};
pub use error::{PhoneticError, Result};
pub use key::{phonetic_key, phonetic_key_by_code};
pub use rules::{apply_rules, Rule, RuleTable};
pub use tokenize::tokenize;
pub use types::{CompareMode, CompareOptions, Language};
