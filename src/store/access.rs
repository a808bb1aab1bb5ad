//! Three-way access decisions.

use super::error::{MissingTarget, StoreError};

/// Result of checking a user against a resource.
///
/// Keeps "unknown user or resource" apart from "known, but not allowed" so callers
/// cannot conflate the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
    NotFound(MissingTarget),
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    /// Collapses the decision into the boolean form, turning misses into errors.
    pub fn into_result(self) -> Result<bool, StoreError> {
        match self {
            AccessDecision::Granted => Ok(true),
            AccessDecision::Denied => Ok(false),
            AccessDecision::NotFound(target) => Err(StoreError::NotFound(target)),
        }
    }
}
