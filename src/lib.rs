//! Quizboss, a quiz boss-battle simulation engine.
//!
//! A class answers quiz questions to collectively damage a boss while the
//! boss counter-attacks on wrong answers. This crate is the battle core:
//! the phase state machine, the turn-resolution math, and the
//! question-queue lifecycle. Rendering, audio, and result persistence are
//! the host's business; the engine exposes its state and a typed event
//! stream and performs no I/O.

pub mod core;
pub mod items;
pub mod quiz;
pub mod simulator;
