//! Error types for synlight

use thiserror::Error;

/// Result type alias for fallible synlight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong outside of highlighting itself.
///
/// Highlighting never fails, these only come from building custom
/// language definitions, looking up languages and loading themes.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("malformed theme: {0}")]
    Theme(#[from] toml::de::Error),

    #[error("invalid colour: {0}")]
    InvalidColour(String),
}
