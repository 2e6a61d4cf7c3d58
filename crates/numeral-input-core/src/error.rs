//! Error types for configuration and platform operations.
//!
//! The edit path itself has no errors: inapplicable edits are no-ops.

use miette::Diagnostic;
use thiserror::Error;

/// A numeral format name that is neither `FARSI` nor `LATIN`.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatParseError {
    #[error("unknown numeral format: {0:?}")]
    #[diagnostic(
        code(numeral_input::format::unknown),
        help("expected FARSI or LATIN")
    )]
    Unknown(String),
}

/// Errors loading a [`NumeralInputConfig`](crate::NumeralInputConfig).
#[derive(Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config document is not valid JSON or has the wrong shape.
    #[error("invalid numeral input config: {0}")]
    #[diagnostic(code(numeral_input::config::json))]
    Json(#[from] serde_json::Error),

    /// The initial value contains characters other than digits.
    #[error("initial value {value:?} contains non-digit characters")]
    #[diagnostic(
        code(numeral_input::config::initial_value),
        help("only 0-9 and ۰-۹ are accepted")
    )]
    InitialValue { value: String },
}

/// Failure reported by a field handle.
#[derive(Error, Debug, Diagnostic, Clone)]
#[error("field operation failed: {0}")]
#[diagnostic(code(numeral_input::platform))]
pub struct PlatformError(pub String);

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}
