//! Per-frame simulation step
//!
//! A first-order damped particle: thrust along the heading, integrate, apply
//! drag. The step runs once per frame with a fixed frame delay, so every
//! quantity is expressed per frame rather than per second.

use serde::{Deserialize, Serialize};
use skiff_math::Vec2;

use crate::field::Field;
use crate::input::Input;
use crate::state::GameState;

/// Upper bound for player and reticle scale
pub const MAX_SCALE: f32 = 2.0;

/// Resting scale of both shapes
const REST_SCALE: f32 = 1.0;

/// Tuning for [`update`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameParams {
    /// Velocity gained per frame at full throttle
    pub move_speed: f32,
    /// Radians turned per frame at full steering
    pub rot_speed: f32,
    /// Fraction of velocity kept after each frame (0..1)
    pub drag: f32,
    /// Fraction of the remaining distance to the target scale covered per frame
    pub scale_rate: f32,
    /// Number of cosmetic modes to cycle through
    pub mode_count: u32,
    /// Stick deflection below which gamepad axes read as zero
    pub stick_deadzone: f32,
    /// Map the aim point through the field so the reticle tracks the cursor
    pub aspect_correct_reticle: bool,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            move_speed: 0.01,
            rot_speed: 0.1,
            drag: 0.9,
            scale_rate: 0.2,
            mode_count: 4,
            stick_deadzone: 0.15,
            aspect_correct_reticle: true,
        }
    }
}

/// Zero out a stick axis inside the dead zone and rescale the rest to 0..1
///
/// The dead zone is clamped to `0.0..=1.0`; NaN reads as no dead zone.
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    let deadzone = if deadzone.is_nan() { 0.0 } else { deadzone.clamp(0.0, 1.0) };
    let magnitude = value.abs();
    if magnitude <= deadzone || deadzone >= 1.0 {
        return 0.0;
    }
    let scaled = (magnitude - deadzone) / (1.0 - deadzone);
    scaled.min(1.0).copysign(value)
}

/// Advance the game by one frame
pub fn update(state: &mut GameState, input: &Input, params: &GameParams) {
    if let Some((width, height)) = input.resize {
        state.field = Field::from_viewport(width, height);
        log::debug!("Field resized to {:.2} x {:.2}", state.field.w, state.field.h);
    }

    // Movement
    let axes = &input.axes;
    let turn = (axes.x1 + apply_deadzone(axes.x3, params.stick_deadzone)).clamp(-1.0, 1.0);
    let throttle = (axes.y1 + apply_deadzone(axes.y3, params.stick_deadzone)).clamp(-1.0, 1.0);

    let player = &mut state.player;
    player.rotation -= params.rot_speed * turn;
    player.vel += Vec2::from_angle(player.rotation) * (params.move_speed * throttle);
    player.pos += player.vel;
    player.vel *= params.drag;

    // Mode
    if input.action.prime && params.mode_count > 0 {
        player.mode = (player.mode + 1) % params.mode_count;
        log::debug!("Mode -> {}", player.mode);
    }

    // Scaling
    player.scale = ease_scale(player.scale, input.held.aux, params.scale_rate);
    state.reticle.scale = ease_scale(state.reticle.scale, input.held.prime, params.scale_rate);

    // Aiming
    let stick = Vec2::new(
        apply_deadzone(axes.x4, params.stick_deadzone),
        apply_deadzone(axes.y4, params.stick_deadzone),
    );
    let aim = if stick != Vec2::ZERO {
        stick
    } else {
        Vec2::new(axes.x2, axes.y2)
    };
    state.reticle.pos = if params.aspect_correct_reticle {
        state.field.to_world(aim)
    } else {
        aim
    };
}

fn ease_scale(current: f32, boosted: bool, rate: f32) -> f32 {
    let target = if boosted { MAX_SCALE } else { REST_SCALE };
    (current + (target - current) * rate).clamp(0.0, MAX_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::project_to_ndc;
    use crate::input::{Axes, Buttons};
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn input_with_axes(axes: Axes) -> Input {
        Input {
            axes,
            ..Input::idle()
        }
    }

    #[test]
    fn test_default_params() {
        let params = GameParams::default();
        assert_eq!(params.move_speed, 0.01);
        assert_eq!(params.rot_speed, 0.1);
        assert_eq!(params.drag, 0.9);
        assert_eq!(params.mode_count, 4);
    }

    #[test]
    fn test_zero_input_decays_velocity() {
        let params = GameParams::default();
        let mut state = GameState::new();
        state.player.vel = Vec2::new(0.1, -0.05);

        let mut last_speed = state.player_speed();
        for _ in 0..100 {
            update(&mut state, &Input::idle(), &params);
            let speed = state.player_speed();
            assert!(speed < last_speed, "speed should strictly decrease");
            last_speed = speed;
        }
        assert!(last_speed < 1e-5);
    }

    #[test]
    fn test_drag_applied_after_integration() {
        let params = GameParams::default();
        let mut state = GameState::new();
        state.player.vel = Vec2::new(1.0, 0.0);

        update(&mut state, &Input::idle(), &params);

        // Position moves by the full velocity, then velocity is damped
        assert!((state.player.pos.x - 1.0).abs() < EPSILON);
        assert!((state.player.vel.x - 0.9).abs() < EPSILON);
    }

    #[test]
    fn test_thrust_follows_heading() {
        let params = GameParams::default();
        let mut state = GameState::new();
        state.player.rotation = FRAC_PI_2;

        update(&mut state, &input_with_axes(Axes { y1: 1.0, ..Axes::default() }), &params);

        // Facing +y: all thrust goes into y
        assert!(state.player.pos.x.abs() < EPSILON);
        assert!((state.player.pos.y - 0.01).abs() < EPSILON);
        assert!((state.player.vel.y - 0.009).abs() < EPSILON);
    }

    #[test]
    fn test_reverse_throttle() {
        let params = GameParams::default();
        let mut state = GameState::new();

        update(&mut state, &input_with_axes(Axes { y1: -1.0, ..Axes::default() }), &params);

        assert!(state.player.pos.x < 0.0);
    }

    #[test]
    fn test_steer_right_turns_clockwise() {
        let params = GameParams::default();
        let mut state = GameState::new();

        update(&mut state, &input_with_axes(Axes { x1: 1.0, ..Axes::default() }), &params);
        assert!((state.player.rotation + 0.1).abs() < EPSILON);

        update(&mut state, &input_with_axes(Axes { x1: -1.0, ..Axes::default() }), &params);
        assert!(state.player.rotation.abs() < EPSILON);
    }

    #[test]
    fn test_keyboard_and_stick_combined_are_clamped() {
        let params = GameParams::default();
        let mut state = GameState::new();
        let axes = Axes { x1: 1.0, x3: 1.0, ..Axes::default() };

        update(&mut state, &input_with_axes(axes), &params);

        assert!((state.player.rotation + params.rot_speed).abs() < EPSILON);
    }

    #[test]
    fn test_stick_inside_deadzone_ignored() {
        let params = GameParams::default();
        let mut state = GameState::new();
        let axes = Axes { x3: 0.1, y3: -0.1, ..Axes::default() };

        update(&mut state, &input_with_axes(axes), &params);

        assert_eq!(state.player.rotation, 0.0);
        assert_eq!(state.player.pos, Vec2::ZERO);
    }

    #[test]
    fn test_apply_deadzone() {
        assert_eq!(apply_deadzone(0.1, 0.15), 0.0);
        assert_eq!(apply_deadzone(-0.15, 0.15), 0.0);
        assert!((apply_deadzone(1.0, 0.15) - 1.0).abs() < EPSILON);
        assert!((apply_deadzone(-1.0, 0.15) + 1.0).abs() < EPSILON);
        // Halfway through the live range
        assert!((apply_deadzone(0.575, 0.15) - 0.5).abs() < EPSILON);
        // No dead zone passes values straight through
        assert_eq!(apply_deadzone(0.3, 0.0), 0.3);
    }

    #[test]
    fn test_deadzone_out_of_range_is_clamped() {
        assert_eq!(apply_deadzone(0.0, -0.5), 0.0);
        assert_eq!(apply_deadzone(0.3, -0.5), 0.3);
        assert_eq!(apply_deadzone(0.0, f32::NAN), 0.0);
        assert_eq!(apply_deadzone(0.9, 1.5), 0.0);
    }

    #[test]
    fn test_negative_deadzone_keeps_idle_still() {
        let params = GameParams {
            stick_deadzone: -0.5,
            ..GameParams::default()
        };
        let mut state = GameState::new();
        for _ in 0..10 {
            update(&mut state, &Input::idle(), &params);
        }
        assert_eq!(state.player.rotation, 0.0);
        assert_eq!(state.player.pos, Vec2::ZERO);
        assert_eq!(state.reticle.pos, Vec2::ZERO);
    }

    #[test]
    fn test_mode_cycles_and_wraps() {
        let params = GameParams::default();
        let mut state = GameState::new();
        let press = Input {
            action: Buttons { prime: true, aux: false },
            ..Input::idle()
        };

        for expected in [1, 2, 3, 0, 1] {
            update(&mut state, &press, &params);
            assert_eq!(state.player.mode, expected);
        }

        // Holding without a fresh press does not cycle
        let hold = Input {
            held: Buttons { prime: true, aux: false },
            ..Input::idle()
        };
        update(&mut state, &hold, &params);
        assert_eq!(state.player.mode, 1);
    }

    #[test]
    fn test_zero_mode_count_never_cycles() {
        let params = GameParams { mode_count: 0, ..GameParams::default() };
        let mut state = GameState::new();
        let press = Input {
            action: Buttons { prime: true, aux: false },
            ..Input::idle()
        };
        update(&mut state, &press, &params);
        assert_eq!(state.player.mode, 0);
    }

    #[test]
    fn test_scales_grow_in_from_zero() {
        let params = GameParams::default();
        let mut state = GameState::new();

        update(&mut state, &Input::idle(), &params);
        assert!((state.player.scale - 0.2).abs() < EPSILON);
        assert!((state.reticle.scale - 0.2).abs() < EPSILON);

        for _ in 0..200 {
            update(&mut state, &Input::idle(), &params);
        }
        assert!((state.player.scale - 1.0).abs() < 1e-3);
        assert!((state.reticle.scale - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_held_buttons_boost_scale() {
        let params = GameParams::default();
        let mut state = GameState::new();
        let hold = Input {
            held: Buttons { prime: true, aux: true },
            ..Input::idle()
        };

        for _ in 0..200 {
            update(&mut state, &hold, &params);
            assert!(state.player.scale <= MAX_SCALE);
            assert!(state.reticle.scale <= MAX_SCALE);
        }
        assert!((state.player.scale - MAX_SCALE).abs() < 1e-3);
        assert!((state.reticle.scale - MAX_SCALE).abs() < 1e-3);
    }

    #[test]
    fn test_scale_rate_out_of_range_stays_bounded() {
        let params = GameParams { scale_rate: 3.0, ..GameParams::default() };
        let mut state = GameState::new();
        for _ in 0..10 {
            update(&mut state, &Input::idle(), &params);
            assert!((0.0..=MAX_SCALE).contains(&state.player.scale));
        }
    }

    #[test]
    fn test_mouse_aim_square_viewport() {
        let params = GameParams::default();
        let mut state = GameState::new();
        let axes = Axes { x2: 0.5, y2: -0.25, ..Axes::default() };

        update(&mut state, &input_with_axes(axes), &params);

        assert_eq!(state.reticle.pos, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn test_mouse_aim_is_aspect_corrected() {
        let params = GameParams::default();
        let mut state = GameState::new();
        let input = Input {
            axes: Axes { x2: 1.0, y2: 1.0, ..Axes::default() },
            resize: Some((800, 400)),
            ..Input::idle()
        };

        update(&mut state, &input, &params);

        assert_eq!(state.reticle.pos, Vec2::new(2.0, 1.0));
        // Lands exactly on the cursor once the renderer normalizes it
        let ndc = project_to_ndc(state.reticle.pos, 2.0);
        assert!((ndc.x - 1.0).abs() < EPSILON && (ndc.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_mouse_aim_uncorrected() {
        let params = GameParams { aspect_correct_reticle: false, ..GameParams::default() };
        let mut state = GameState::new();
        let input = Input {
            axes: Axes { x2: 1.0, y2: 1.0, ..Axes::default() },
            resize: Some((800, 400)),
            ..Input::idle()
        };

        update(&mut state, &input, &params);

        assert_eq!(state.reticle.pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_right_stick_overrides_mouse() {
        let params = GameParams::default();
        let mut state = GameState::new();
        let axes = Axes { x2: -0.5, y2: -0.5, x4: 1.0, y4: 0.0, ..Axes::default() };

        update(&mut state, &input_with_axes(axes), &params);

        assert!((state.reticle.pos.x - 1.0).abs() < EPSILON);
        assert_eq!(state.reticle.pos.y, 0.0);
    }

    #[test]
    fn test_resting_right_stick_falls_back_to_mouse() {
        let params = GameParams::default();
        let mut state = GameState::new();
        let axes = Axes { x2: -0.5, y2: 0.5, x4: 0.05, y4: -0.05, ..Axes::default() };

        update(&mut state, &input_with_axes(axes), &params);

        assert_eq!(state.reticle.pos, Vec2::new(-0.5, 0.5));
    }

    #[test]
    fn test_resize_updates_field() {
        let params = GameParams::default();
        let mut state = GameState::new();
        let input = Input {
            resize: Some((300, 600)),
            ..Input::idle()
        };

        update(&mut state, &input, &params);

        assert_eq!(state.field, Field { w: 1.0, h: 2.0 });

        // Without a resize the field is left alone
        update(&mut state, &Input::idle(), &params);
        assert_eq!(state.field, Field { w: 1.0, h: 2.0 });
    }
}
