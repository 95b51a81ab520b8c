//! GPU-compatible data types for the shape pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A shape vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    /// Position (x, y, z, w); only x and y are used by the vertex stage
    pub position: [f32; 4],
}

impl ShapeVertex {
    /// Create a vertex on the z = 0 plane
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            position: [x, y, 0.0, 1.0],
        }
    }
}

/// Per-shape uniforms
/// Layout: 32 bytes total (must match shape.wgsl ShapeUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeUniforms {
    /// World-space offset (8 bytes)
    pub offset: [f32; 2],
    /// Rotation in radians, counter-clockwise
    pub rotation: f32,
    /// Uniform scale applied before the offset
    pub scale: f32,
    /// Viewport width / height
    pub aspect: f32,
    /// Seconds since startup
    pub ticks: f32,
    /// Green channel for the ship's dot style
    pub green: f32,
    pub _padding: f32,
}

impl Default for ShapeUniforms {
    fn default() -> Self {
        Self {
            offset: [0.0; 2],
            rotation: 0.0,
            scale: 1.0,
            aspect: 1.0,
            ticks: 0.0,
            green: 0.0,
            _padding: 0.0,
        }
    }
}
