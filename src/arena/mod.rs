//! A small turn-based battle toy built on the same text conventions as the store.
//!
//! - [`Combatant`]: health, attack and defense, with optional damage resistance
//! - [`Hero`]: a combatant with levels, experience and an [`Inventory`]
//! - [`save`]: hero save files
//!
//! Defeat and missing items are reported as [`DomainError`]s.

pub mod combatant;
pub mod error;
pub mod hero;
pub mod inventory;
pub mod save;

pub use combatant::*;
pub use error::*;
pub use hero::*;
pub use inventory::*;
pub use save::{load_hero, read_hero, save_hero, write_hero};
