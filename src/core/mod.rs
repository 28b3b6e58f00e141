//! The battle engine: constants, pure turn math, status effects, the
//! session state machine, and the stats it accumulates.

pub mod constants;
pub mod events;
pub mod resolver;
pub mod session;
pub mod stats;
pub mod status;

pub use events::*;
pub use session::*;
pub use stats::*;
pub use status::*;
