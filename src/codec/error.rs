//! Errors raised while reading the line-oriented text format.

use thiserror::Error;

use crate::model::ValidationError;

/// A line of persisted text could not be turned back into a record or resource.
///
/// Every variant carries the 1-based line number it was found on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: unexpected trailing token `{token}`")]
    TrailingTokens { line: usize, token: String },

    #[error("line {line}: field `{field}` is not an integer: `{token}`")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("line {line}: not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("line {line}: invalid escape sequence in `{token}`")]
    InvalidEscape { line: usize, token: String },

    /// Only raised in [`ParseMode::Strict`](super::ParseMode::Strict).
    #[error("line {line}: unknown tag `{tag}`")]
    UnknownTag { line: usize, tag: String },

    #[error("line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: ValidationError,
    },
}
