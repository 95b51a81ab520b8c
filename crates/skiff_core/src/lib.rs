//! Core game types for Skiff
//!
//! This crate holds everything the frame loop needs that is independent of
//! windowing and the GPU:
//! - [`GameState`] - the single mutable aggregate (player, reticle, field)
//! - [`Input`] - one frame's snapshot of normalized input
//! - [`GameParams`] and [`update`] - the per-frame simulation step
//! - [`Field`] - aspect-ratio-aware mapping between screen and world space

mod field;
mod input;
mod simulation;
mod state;

pub use field::{project_to_ndc, Field};
pub use input::{Axes, Buttons, Input};
pub use simulation::{apply_deadzone, update, GameParams, MAX_SCALE};
pub use state::{GameState, Player, Reticle};

// Re-export math types for convenience
pub use skiff_math::Vec2;
