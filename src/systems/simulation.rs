//! Game simulation system
//!
//! Owns the game state and advances it once per frame:
//! - Input → `skiff_core::update`
//! - Frame counting and elapsed time for shader animation
//! - Optional per-frame state tracing

use std::time::Instant;
use skiff_core::{GameParams, GameState, Input};

/// Manages the game simulation loop
pub struct SimulationSystem {
    state: GameState,
    params: GameParams,
    started: Instant,
    frame: u64,
    trace_state: bool,
}

impl SimulationSystem {
    /// Create a new simulation system with a zeroed state
    pub fn new(params: GameParams) -> Self {
        Self {
            state: GameState::new(),
            params,
            started: Instant::now(),
            frame: 0,
            trace_state: false,
        }
    }

    /// Log the full state after every frame
    pub fn with_trace(mut self, trace_state: bool) -> Self {
        self.trace_state = trace_state;
        self
    }

    /// Run one simulation frame
    pub fn update(&mut self, input: &Input) {
        skiff_core::update(&mut self.state, input, &self.params);
        self.frame += 1;

        if self.trace_state {
            let p = &self.state.player;
            let r = &self.state.reticle;
            log::debug!(
                "frame {}: pos=({:.3}, {:.3}) vel=({:.4}, {:.4}) rot={:.3} scale={:.3} mode={} reticle=({:.3}, {:.3}) x{:.3}",
                self.frame,
                p.pos.x,
                p.pos.y,
                p.vel.x,
                p.vel.y,
                p.rotation,
                p.scale,
                p.mode,
                r.pos.x,
                r.pos.y,
                r.scale
            );
        }
    }

    /// Seconds since the simulation started
    pub fn ticks(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of frames simulated so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(GameParams::default())
    }
}
