//! # Access Registry
//!
//! > **A typed record store with flat-text persistence.**
//!
//! The registry keeps users of several kinds (plain users, students, teachers and
//! administrators) alongside the resources they may or may not reach. It answers
//! lookups, sorts, access checks, and saves itself as a line-oriented text file that
//! loads back into the right concrete kinds.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Record`](model::Record) hoists the shared identity fields and keeps the per-kind
//! data in the closed [`RecordKind`](model::RecordKind) enum. Constructors validate;
//! an invalid record can't be built.
//!
//! ### 2. The Store ([`store`])
//! [`RecordStore`](store::RecordStore) owns both sequences. Lookups are linear scans,
//! sorting is stable, and access checks come in two shapes:
//! - [`check_access`](store::RecordStore::check_access): `Result<bool, StoreError>`, misses are errors
//! - [`access_decision`](store::RecordStore::access_decision): `Granted` / `Denied` / `NotFound`
//!
//! ### 3. The Format ([`codec`])
//! One entity per line, tag first. Unknown tags are skipped or rejected depending on
//! [`ParseMode`](codec::ParseMode).
//!
//! ### 4. Sharing ([`actor`], [`lifecycle`])
//! The store is single-threaded. [`StoreActor`](actor::StoreActor) owns it on a Tokio
//! task so many callers can use it through cloneable [`StoreClient`](actor::StoreClient)s.
//! [`RegistrySystem`](lifecycle::RegistrySystem) starts and stops it.
//!
//! ### 5. The Arena ([`arena`])
//! A small battle toy (heroes, monsters, items, save files) that reuses the same text
//! conventions.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use access_registry::model::{Record, Resource};
//! use access_registry::store::RecordStore;
//!
//! let mut store = RecordStore::new();
//! store.add_record(Record::teacher("Brown", 2, 3, "CS").unwrap());
//! store.add_resource(Resource::new("Lab", 3).unwrap());
//! assert!(store.check_access(2, "Lab").unwrap());
//! ```
//!
//! ```bash
//! # Access-control walkthrough
//! RUST_LOG=info cargo run
//!
//! # Battle walkthrough
//! RUST_LOG=info cargo run --bin battle
//! ```

pub mod actor;
pub mod arena;
pub mod codec;
pub mod lifecycle;
pub mod model;
pub mod store;
