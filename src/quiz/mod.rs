//! Quiz content: question types, payload loading, and queue lifecycle.

pub mod payload;
pub mod queue;
pub mod types;

pub use payload::*;
pub use queue::*;
pub use types::*;
