//! Single-owner access to a [`RecordStore`](crate::store::RecordStore) from many tasks.
//!
//! - [`StoreActor`]: owns the store and handles requests one at a time
//! - [`StoreClient`]: cloneable handle that sends requests and awaits replies
//! - [`ActorError`]: channel failures plus the store's own errors

pub mod core;
pub mod error;

pub use self::core::*;
pub use error::*;
