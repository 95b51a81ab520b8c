//! Skiff Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws the ship and the
//! reticle as flat shapes positioned entirely by shader uniforms.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ShapePipeline`] - Affine vertex stage plus one fragment style
//! - [`geometry::ShapeMesh`] - Static vertex/index buffers for each shape

pub mod context;
pub mod geometry;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use geometry::ShapeMesh;
pub use pipeline::{ShapePipeline, ShapeStyle, ShapeUniforms, ShapeVertex};
