//! Error types for the arena toy.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::ParseError;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Health reached zero. Raised by the hit that finished the combatant.
    #[error("{name} has been defeated!")]
    Defeated { name: String },

    #[error("Item not found: {name}")]
    ItemNotFound { name: String },

    #[error("Failed to open save file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed save file: {0}")]
    Parse(#[from] ParseError),
}
