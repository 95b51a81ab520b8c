//! Skiff - a single-screen arcade toy
//!
//! The binary wires these modules into a fixed-delay frame loop:
//! poll input, update the game state, draw the ship and reticle, present.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod systems;
