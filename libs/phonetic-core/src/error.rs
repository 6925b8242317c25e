//! Error types for phonetic-core.

use thiserror::Error;

/// Result type alias using PhoneticError.
pub type Result<T> = std::result::Result<T, PhoneticError>;

/// Errors raised when an external code is converted into a typed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneticError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("unsupported comparison mode: {0}")]
    UnsupportedMode(String),
}
