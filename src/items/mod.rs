//! Passives, potions, and status-effect kinds.

pub mod types;

pub use types::*;
