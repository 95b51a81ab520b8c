//! Rendering pipeline components
//!
//! One shader module drives every shape; pipelines differ only in the
//! fragment entry point.

pub mod shape_pipeline;
pub mod types;

pub use shape_pipeline::{load_shader, ShapePipeline, ShapeStyle};
pub use types::{ShapeUniforms, ShapeVertex};
