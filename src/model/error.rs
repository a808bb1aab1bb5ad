//! Construction-time validation errors for records and resources.

use thiserror::Error;

/// An invariant was violated while building a [`Record`](super::Record) or
/// [`Resource`](super::Resource).
///
/// Validation happens in the constructors, so an invalid value is never reachable
/// through the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The name of a record or resource was empty.
    #[error("{entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    /// A numeric field was negative, or too large to store.
    #[error("{field} must be a non-negative 32-bit integer, got {value}")]
    Negative { field: &'static str, value: i64 },
}

/// Converts a caller-supplied integer into a non-negative `u32`.
pub(crate) fn non_negative(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::Negative { field, value })
}
