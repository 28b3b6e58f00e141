//! Monte Carlo battle simulator for balance analysis.
//!
//! Plays thousands of complete sessions through the real engine with a
//! configurable bot, to answer questions like:
//! - How does the win rate change with class accuracy per difficulty?
//! - How often does a run go through the finish phase?
//! - Is the potion economy generous enough to matter?

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, synthetic_payload};
