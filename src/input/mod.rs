//! Input handling module
//!
//! Maps window-level keys to application actions. Ship controls are handled
//! by `skiff_input::ShipController`.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
