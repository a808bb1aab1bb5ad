//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by the
//! `RUST_LOG` environment variable.
//!
//! ```bash
//! # Mutations, saves and loads
//! RUST_LOG=info cargo run
//!
//! # Also show lookups, access decisions and sorts
//! RUST_LOG=debug cargo run
//!
//! # Only the store module
//! RUST_LOG=access_registry::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a demo run looks like:
//!
//! ```text
//! INFO Actor started size=0
//! INFO add_record: Record added kind="Student" id=1 size=1
//! INFO add_resource: Resource added name="Lab" required_level=3 size=1
//! INFO save: Store saved path=system_data.txt
//! INFO Shutdown size=3
//! ```
//!
//! Client methods carry `#[instrument]` spans, so log lines show which request
//! triggered them.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
