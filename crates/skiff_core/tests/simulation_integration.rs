//! Integration tests for the simulation step
//!
//! These tests drive `update` over many frames the way the frame loop does:
//! 1. A burst of thrust followed by coasting settles at a finite distance
//! 2. Steering while thrusting traces a closed loop
//! 3. Resizes mid-flight keep the reticle glued to the cursor

use skiff_core::{project_to_ndc, update, Axes, Buttons, GameParams, GameState, Input, Vec2};

const EPSILON: f32 = 1e-4;

fn thrust(y1: f32, x1: f32) -> Input {
    Input {
        axes: Axes { x1, y1, ..Axes::default() },
        ..Input::idle()
    }
}

// ==================== Movement Tests ====================

/// Coasting distance after a single impulse is bounded by the geometric series
#[test]
fn test_single_impulse_coasts_to_a_stop() {
    let params = GameParams::default();
    let mut state = GameState::new();

    update(&mut state, &thrust(1.0, 0.0), &params);
    for _ in 0..500 {
        update(&mut state, &Input::idle(), &params);
    }

    // move_speed * (1 + drag + drag^2 + ...) = 0.01 / (1 - 0.9)
    let limit = params.move_speed / (1.0 - params.drag);
    assert!((state.player.pos.x - limit).abs() < EPSILON, "pos.x = {}", state.player.pos.x);
    assert!(state.player.pos.y.abs() < EPSILON);
    assert!(state.player_speed() < 1e-6);
}

/// Holding thrust reaches a terminal velocity instead of accelerating forever
#[test]
fn test_held_thrust_reaches_terminal_velocity() {
    let params = GameParams::default();
    let mut state = GameState::new();

    for _ in 0..500 {
        update(&mut state, &thrust(1.0, 0.0), &params);
    }

    // Steady state after damping: v = drag * (v + move_speed)
    let terminal = params.drag * params.move_speed / (1.0 - params.drag);
    assert!((state.player.vel.x - terminal).abs() < EPSILON);
}

/// Full steering with full thrust flies a circle back toward the start
#[test]
fn test_turning_flight_stays_bounded() {
    let params = GameParams::default();
    let mut state = GameState::new();

    let mut max_distance: f32 = 0.0;
    for _ in 0..1_000 {
        update(&mut state, &thrust(1.0, 1.0), &params);
        max_distance = max_distance.max(state.player.pos.length());
    }

    // The heading turns a full circle every ~63 frames, so the ship orbits
    // instead of covering the ~90 units a straight run would
    assert!(max_distance < 3.0, "ship drifted to {}", max_distance);
    assert!(state.player.rotation < -60.0);
}

// ==================== Presentation Tests ====================

#[test]
fn test_reticle_tracks_cursor_across_resizes() {
    let params = GameParams::default();
    let mut state = GameState::new();
    let cursor = Vec2::new(0.8, -0.6);

    for (w, h) in [(400, 300), (300, 400), (1280, 720), (200, 200)] {
        let input = Input {
            axes: Axes { x2: cursor.x, y2: cursor.y, ..Axes::default() },
            resize: Some((w, h)),
            ..Input::idle()
        };
        update(&mut state, &input, &params);

        let on_screen = project_to_ndc(state.reticle.pos, w as f32 / h as f32);
        assert!((on_screen.x - cursor.x).abs() < EPSILON, "{}x{}", w, h);
        assert!((on_screen.y - cursor.y).abs() < EPSILON, "{}x{}", w, h);
    }
}

#[test]
fn test_mode_and_scale_evolve_independently_of_motion() {
    let params = GameParams::default();
    let mut state = GameState::new();

    let frame = Input {
        axes: Axes { y1: 1.0, ..Axes::default() },
        action: Buttons { prime: true, aux: false },
        held: Buttons { prime: false, aux: true },
        ..Input::idle()
    };
    for _ in 0..6 {
        update(&mut state, &frame, &params);
    }

    assert_eq!(state.player.mode, 6 % params.mode_count);
    assert!(state.player.scale > 1.0);
    assert!(state.reticle.scale < 1.0);
    assert!(state.player.pos.x > 0.0);
}
