//! Error types for style sheet construction.

use thiserror::Error;

/// Errors raised while building a [`StyleSheet`](crate::StyleSheet).
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The TOML source could not be parsed.
    #[error("invalid style sheet: {0}")]
    Parse(#[from] toml::de::Error),

    /// `base` names a preset that does not exist.
    #[error("unknown base theme: {0}")]
    UnknownBase(String),

    /// An alias was given an empty name.
    #[error("style alias name is empty")]
    EmptyName,

    /// An alias maps to an empty color token.
    #[error("style alias {name:?} has an empty color token")]
    EmptyToken { name: String },
}

/// Result type for style sheet operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
