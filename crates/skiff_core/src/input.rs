//! Per-frame input snapshot
//!
//! Collected by `skiff_input` from the keyboard, mouse, and gamepad, then
//! consumed by [`crate::update`]. Axes are normalized to -1.0..=1.0.

/// Normalized input axes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Axes {
    /// Keyboard steering: +1 right arrow, -1 left arrow
    pub x1: f32,
    /// Keyboard throttle: +1 up arrow, -1 down arrow
    pub y1: f32,
    /// Mouse cursor x in normalized device coordinates
    pub x2: f32,
    /// Mouse cursor y in normalized device coordinates (+y up)
    pub y2: f32,
    /// Gamepad left stick x
    pub x3: f32,
    /// Gamepad left stick y (+y up)
    pub y3: f32,
    /// Gamepad right stick x
    pub x4: f32,
    /// Gamepad right stick y (+y up)
    pub y4: f32,
}

/// Button set shared by the edge-triggered and held views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    /// Primary button
    pub prime: bool,
    /// Auxiliary button
    pub aux: bool,
}

/// One frame of input
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Input {
    /// The user asked to quit
    pub quit: bool,
    pub axes: Axes,
    /// Buttons pressed since the previous frame
    pub action: Buttons,
    /// Buttons currently held down
    pub held: Buttons,
    /// New viewport size in pixels, if the window was resized this frame
    pub resize: Option<(u32, u32)>,
}

impl Input {
    /// Input with nothing pressed and all axes centered
    pub fn idle() -> Self {
        Self::default()
    }
}
