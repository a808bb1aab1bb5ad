//! Record and resource types held by the [`RecordStore`](crate::store::RecordStore).
//!
//! Every concrete kind of record shares the same identity payload (`id`, `name`,
//! `privilege_level`) and carries its extra data in [`RecordKind`]. Construction goes
//! through validating constructors only.

pub mod error;
pub mod record;
pub mod resource;

pub use error::*;
pub use record::*;
pub use resource::*;
