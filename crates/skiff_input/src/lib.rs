//! Skiff Input Handling
//!
//! This crate turns raw keyboard, mouse, and gamepad state into the
//! per-frame [`skiff_core::Input`] snapshot consumed by the simulation.

mod gamepad;
mod ship_controller;

pub use gamepad::{GamepadReader, GamepadState};
pub use ship_controller::{normalize_cursor, ShipController};
