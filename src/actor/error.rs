//! Errors surfaced through a [`StoreClient`](super::StoreClient).

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ActorError {
    #[error("Actor closed")]
    Closed,
    #[error("Actor dropped response channel")]
    Dropped,
    #[error(transparent)]
    Store(#[from] StoreError),
}
