//! Application systems
//!
//! Window, simulation, rendering, and frame pacing, each owned by the App in
//! main.rs.

mod frame_pacer;
mod render;
mod simulation;
mod window;

pub use frame_pacer::FramePacer;
pub use render::{reticle_uniforms, ship_uniforms, RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{debug_title, WindowError, WindowSystem};
