//! Core types for phonetic matching.

use crate::error::PhoneticError;
use crate::rules::{self, RuleTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported languages, identified by their ISO 639-1 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
    Fr,
    It,
}

impl Language {
    /// Every supported language, in code order.
    pub const ALL: [Language; 4] = [Self::Es, Self::En, Self::Fr, Self::It];

    /// Get the two-letter code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Fr => "fr",
            Self::It => "it",
        }
    }

    /// The ordered rewrite table for this language.
    pub fn rules(self) -> &'static RuleTable {
        match self {
            Self::Es => rules::es::table(),
            Self::En => rules::en::table(),
            Self::Fr => rules::fr::table(),
            Self::It => rules::it::table(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = PhoneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "it" => Ok(Self::It),
            other => Err(PhoneticError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Language {
    type Error = PhoneticError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Which ratio the similarity scorer computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareMode {
    /// Symmetric: intersection over union (or over the longer side when positional).
    #[serde(rename = "total")]
    Total,
    /// How much of A is found in B.
    #[serde(rename = "a-in-b")]
    AInB,
    /// How much of B is found in A.
    #[serde(rename = "b-in-a")]
    BInA,
}

impl Default for CompareMode {
    fn default() -> Self {
        Self::Total
    }
}

impl CompareMode {
    /// Get the external tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::AInB => "a-in-b",
            Self::BInA => "b-in-a",
        }
    }
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompareMode {
    type Err = PhoneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total" => Ok(Self::Total),
            "a-in-b" => Ok(Self::AInB),
            "b-in-a" => Ok(Self::BInA),
            other => Err(PhoneticError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Comparison settings. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    pub mode: CompareMode,
    /// Compare keys index by index instead of as a bag of words.
    pub order_matters: bool,
}

impl CompareOptions {
    /// Create options with an explicit mode and order flag.
    pub fn new(mode: CompareMode, order_matters: bool) -> Self {
        Self {
            mode,
            order_matters,
        }
    }

    /// Bag-of-words comparison in the given mode.
    pub fn unordered(mode: CompareMode) -> Self {
        Self::new(mode, false)
    }

    /// Positional comparison in the given mode.
    pub fn ordered(mode: CompareMode) -> Self {
        Self::new(mode, true)
    }
}
