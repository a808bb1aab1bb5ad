//! Runtime orchestration and lifecycle management.
//!
//! - [`RegistrySystem`] - starts the store actor and shuts it down again
//! - [`RegistryConfig`] - environment-driven settings
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod registry_system;
pub mod tracing;

pub use config::*;
pub use registry_system::*;
pub use self::tracing::*;
