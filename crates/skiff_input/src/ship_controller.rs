//! Ship controller for keyboard and mouse input
//!
//! Controls:
//! - Up/Down arrows: Thrust forward/backward
//! - Left/Right arrows: Turn
//! - Space: Cycle mode
//! - Shift: Grow the ship while held
//! - Mouse: Aim the reticle
//! - Left mouse button: Grow the reticle while held

use skiff_core::{Axes, Buttons, Input};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::gamepad::GamepadState;

/// Map a cursor position in pixels to normalized device coordinates
///
/// The window's top-left maps to (-1, 1) and bottom-right to (1, -1).
/// A zero-sized viewport maps everything to the center.
pub fn normalize_cursor(x: f64, y: f64, width: u32, height: u32) -> (f32, f32) {
    if width == 0 || height == 0 {
        return (0.0, 0.0);
    }
    let nx = x * 2.0 / width as f64 - 1.0;
    let ny = -(y * 2.0 / height as f64 - 1.0);
    (nx as f32, ny as f32)
}

/// Accumulates window events between frames and produces an [`Input`]
pub struct ShipController {
    // Keyboard state
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    shift: bool,
    space: bool,

    // Edge-triggered state, cleared by `collect`
    prime_pressed: bool,
    quit_requested: bool,
    pending_resize: Option<(u32, u32)>,

    // Mouse state
    mouse_pressed: bool,
    cursor: (f64, f64),
    viewport: (u32, u32),
}

impl Default for ShipController {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl ShipController {
    /// Create a controller for a viewport of `width` x `height` pixels
    ///
    /// The cursor starts centered and the initial size is reported as a
    /// resize on the first frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            shift: false,
            space: false,

            prime_pressed: false,
            quit_requested: false,
            pending_resize: Some((width, height)),

            mouse_pressed: false,
            cursor: (width as f64 / 2.0, height as f64 / 2.0),
            viewport: (width, height),
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is one the controller tracks.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ArrowUp => { self.up = pressed; true }
            KeyCode::ArrowDown => { self.down = pressed; true }
            KeyCode::ArrowLeft => { self.left = pressed; true }
            KeyCode::ArrowRight => { self.right = pressed; true }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => { self.shift = pressed; true }
            KeyCode::Space => {
                // Key repeat arrives as more presses; only the first one counts
                if pressed && !self.space {
                    self.prime_pressed = true;
                }
                self.space = pressed;
                true
            }
            _ => false,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.mouse_pressed = state == ElementState::Pressed;
        }
    }

    /// Process cursor movement, in physical pixels
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    /// Process a window resize, in physical pixels
    pub fn process_resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.pending_resize = Some((width, height));
    }

    /// Ask the frame loop to stop after the current frame
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Current viewport size in physical pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Keyboard steering and throttle in -1.0..=1.0
    ///
    /// Returns (turn, throttle): turn is positive for the right arrow,
    /// throttle is positive for the up arrow.
    pub fn keyboard_axes(&self) -> (f32, f32) {
        let turn = (self.right as i32 - self.left as i32) as f32;
        let throttle = (self.up as i32 - self.down as i32) as f32;
        (turn, throttle)
    }

    /// Build this frame's input snapshot and clear edge-triggered state
    pub fn collect(&mut self, gamepad: &GamepadState) -> Input {
        let (x1, y1) = self.keyboard_axes();
        let (x2, y2) = normalize_cursor(
            self.cursor.0,
            self.cursor.1,
            self.viewport.0,
            self.viewport.1,
        );

        let input = Input {
            quit: self.quit_requested,
            axes: Axes {
                x1,
                y1,
                x2,
                y2,
                x3: gamepad.left_stick.0,
                y3: gamepad.left_stick.1,
                x4: gamepad.right_stick.0,
                y4: gamepad.right_stick.1,
            },
            action: Buttons {
                prime: self.prime_pressed || gamepad.prime_pressed,
                aux: false,
            },
            held: Buttons {
                prime: self.mouse_pressed,
                aux: self.shift || gamepad.aux_held,
            },
            resize: self.pending_resize.take(),
        };

        self.prime_pressed = false;
        input
    }
}
