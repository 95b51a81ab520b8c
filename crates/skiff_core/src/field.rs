//! Aspect-ratio-aware coordinate mapping
//!
//! The renderer normalizes world positions so that the shorter window edge
//! always spans -1..1 in world units. Only the aspect ratio matters, never the
//! pixel count. [`Field`] describes the resulting visible world rectangle and
//! maps normalized screen coordinates back into it.

use skiff_math::Vec2;

/// Half extents of the visible world
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    /// Half width in world units
    pub w: f32,
    /// Half height in world units
    pub h: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl Field {
    /// The field of a square viewport
    pub const SQUARE: Self = Self { w: 1.0, h: 1.0 };

    /// Compute the field for a viewport of `width` x `height` pixels
    ///
    /// Degenerate sizes (a minimized window) fall back to [`Field::SQUARE`].
    pub fn from_viewport(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::SQUARE;
        }
        Self::from_aspect(width as f32 / height as f32)
    }

    /// Compute the field for a width / height ratio
    pub fn from_aspect(aspect: f32) -> Self {
        if !(aspect.is_finite() && aspect > 0.0) {
            return Self::SQUARE;
        }
        if aspect > 1.0 {
            Self { w: aspect, h: 1.0 }
        } else {
            Self { w: 1.0, h: 1.0 / aspect }
        }
    }

    /// Map normalized device coordinates (-1..1 on both axes) to world space
    pub fn to_world(&self, ndc: Vec2) -> Vec2 {
        ndc.component_mul(Vec2::new(self.w, self.h))
    }
}

/// Map a world position to normalized device coordinates
///
/// Mirrors the vertex stage of `shape.wgsl`: y is stretched by the aspect
/// ratio, and on landscape viewports both axes are divided by it.
pub fn project_to_ndc(p: Vec2, aspect: f32) -> Vec2 {
    let mut out = Vec2::new(p.x, p.y * aspect);
    if aspect > 1.0 {
        out = out / aspect;
    }
    out
}
