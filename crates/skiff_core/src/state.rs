//! Game state
//!
//! One value, one writer (the simulation step), one reader (the renderer).

use crate::field::Field;
use skiff_math::Vec2;

/// The player's ship
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Player {
    /// Position in world space
    pub pos: Vec2,
    /// Velocity in world units per frame
    pub vel: Vec2,
    /// Heading in radians, counter-clockwise from +x
    pub rotation: f32,
    /// Display scale, 0.0..=2.0
    pub scale: f32,
    /// Cosmetic mode, cycles through `0..GameParams::mode_count`
    pub mode: u32,
}

/// The aiming reticle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reticle {
    /// Position in world space
    pub pos: Vec2,
    /// Display scale, 0.0..=2.0
    pub scale: f32,
}

/// Everything the game remembers between frames
///
/// `Default` zero-initializes the player and reticle, so both shapes start at
/// scale 0 and grow in over the first frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub reticle: Reticle,
    /// Visible world extents, updated on resize
    pub field: Field,
}

impl GameState {
    /// Create a zero-initialized state
    pub fn new() -> Self {
        Self::default()
    }

    /// Speed of the player in world units per frame
    pub fn player_speed(&self) -> f32 {
        self.player.vel.length()
    }
}
