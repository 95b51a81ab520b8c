//! 2D Mathematics Library
//!
//! This crate provides the small vector type shared by the Skiff crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components

mod vec2;

pub use vec2::Vec2;
