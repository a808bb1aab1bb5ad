//! Error types for the record store.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::ParseError;
use crate::model::ValidationError;

/// The lookup target that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingTarget {
    User(u32),
    Resource(String),
}

impl fmt::Display for MissingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingTarget::User(id) => write!(f, "User not found: {}", id),
            MissingTarget::Resource(name) => write!(f, "Resource not found: {}", name),
        }
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record or resource failed construction-time validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A lookup required by the operation found nothing.
    ///
    /// Distinct from a negative access decision.
    #[error("{0}")]
    NotFound(MissingTarget),

    /// The persistence sink or source could not be opened, read or written.
    #[error("I/O error{}: {source}", display_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl StoreError {
    pub(crate) fn io(source: io::Error) -> Self {
        StoreError::Io { path: None, source }
    }

    /// Attaches `path` to an I/O error that does not name one yet.
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            StoreError::Io { path: None, source } => StoreError::io_at(path, source),
            other => other,
        }
    }

    pub(crate) fn io_at(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: Some(path.into()),
            source,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" on {}", p.display()),
        None => String::new(),
    }
}
