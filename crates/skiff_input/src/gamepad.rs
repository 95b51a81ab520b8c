//! Gamepad polling through gilrs
//!
//! Sticks:
//! - Left stick: steering (x) and throttle (y)
//! - Right stick: aim
//!
//! Buttons:
//! - South (A / Cross): prime action, edge-triggered
//! - Right shoulder: aux, held

use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};

/// One frame of gamepad state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GamepadState {
    /// Left stick (x, y), +y up
    pub left_stick: (f32, f32),
    /// Right stick (x, y), +y up
    pub right_stick: (f32, f32),
    /// South button went down since the last poll
    pub prime_pressed: bool,
    /// Right shoulder is held
    pub aux_held: bool,
}

/// Reads the first connected gamepad
///
/// Gamepad support is optional: when gilrs cannot start on this platform the
/// reader stays inert and every poll returns the idle state.
pub struct GamepadReader {
    gilrs: Option<Gilrs>,
    active: Option<GamepadId>,
}

impl GamepadReader {
    /// Start gilrs and pick up any controller that is already plugged in
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(e) => {
                log::warn!("Gamepad support unavailable: {}", e);
                None
            }
        };

        let mut active = None;
        if let Some(gilrs) = &gilrs {
            for (id, gamepad) in gilrs.gamepads() {
                log::info!("Detected controller in slot {}: {}", id, gamepad.name());
                if active.is_none() {
                    active = Some(id);
                }
            }
        }

        Self { gilrs, active }
    }

    /// A reader with no backend, for tests and headless runs
    pub fn disabled() -> Self {
        Self {
            gilrs: None,
            active: None,
        }
    }

    /// Whether a controller is currently in use
    pub fn is_connected(&self) -> bool {
        self.active.is_some()
    }

    /// Drain pending gamepad events and sample the active controller
    pub fn poll(&mut self) -> GamepadState {
        let Some(gilrs) = &mut self.gilrs else {
            return GamepadState::default();
        };

        let mut prime_pressed = false;
        while let Some(gilrs::Event { id, event, .. }) = gilrs.next_event() {
            match event {
                EventType::Connected => {
                    if self.active.is_none() {
                        log::info!("Controller connected in slot {}", id);
                        self.active = Some(id);
                    }
                }
                EventType::Disconnected => {
                    if self.active == Some(id) {
                        log::info!("Controller in slot {} disconnected", id);
                        self.active = next_active(id, gilrs.gamepads().map(|(other, _)| other));
                        if let Some(other) = self.active {
                            log::info!("Switched to controller in slot {}", other);
                        }
                    }
                }
                EventType::ButtonPressed(Button::South, _) if self.active == Some(id) => {
                    prime_pressed = true;
                }
                _ => {}
            }
        }

        let Some(gamepad) = self.active.and_then(|id| gilrs.connected_gamepad(id)) else {
            return GamepadState {
                prime_pressed,
                ..GamepadState::default()
            };
        };

        GamepadState {
            left_stick: (
                gamepad.value(Axis::LeftStickX),
                gamepad.value(Axis::LeftStickY),
            ),
            right_stick: (
                gamepad.value(Axis::RightStickX),
                gamepad.value(Axis::RightStickY),
            ),
            prime_pressed,
            aux_held: gamepad.is_pressed(Button::RightTrigger),
        }
    }
}

/// The first connected pad other than the one just lost
fn next_active<T: PartialEq>(lost: T, connected: impl IntoIterator<Item = T>) -> Option<T> {
    connected.into_iter().find(|id| *id != lost)
}

impl Default for GamepadReader {
    fn default() -> Self {
        Self::new()
    }
}
