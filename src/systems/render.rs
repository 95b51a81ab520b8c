//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Ship and reticle pipelines
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use skiff_core::GameState;
use skiff_render::{
    context::{ContextError, RenderContext},
    geometry::ShapeMesh,
    pipeline::{load_shader, ShapePipeline, ShapeStyle, ShapeUniforms},
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated; it has been reconfigured
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Surface texture was not ready in time
    Timeout,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Timeout => write!(f, "Surface timeout"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Uniforms for the ship at its current position, heading, and mode
pub fn ship_uniforms(
    state: &GameState,
    aspect: f32,
    ticks: f32,
    config: &RenderingConfig,
) -> ShapeUniforms {
    let p = &state.player;
    ShapeUniforms {
        offset: p.pos.to_array(),
        rotation: p.rotation,
        scale: config.ship_size * p.scale,
        aspect,
        ticks,
        green: p.mode as f32 * config.mode_tint_step,
        _padding: 0.0,
    }
}

/// Uniforms for the reticle, spinning with time
pub fn reticle_uniforms(state: &GameState, aspect: f32, ticks: f32) -> ShapeUniforms {
    let r = &state.reticle;
    ShapeUniforms {
        offset: r.pos.to_array(),
        rotation: ticks,
        scale: r.scale,
        aspect,
        ticks,
        green: 0.0,
        _padding: 0.0,
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    ship_pipeline: ShapePipeline,
    reticle_pipeline: ShapePipeline,
    ship_mesh: ShapeMesh,
    reticle_mesh: ShapeMesh,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let shader = load_shader(&context.device);
        let format = context.config.format;
        let ship_pipeline = ShapePipeline::new(&context.device, &shader, format, ShapeStyle::Dot);
        let reticle_pipeline =
            ShapePipeline::new(&context.device, &shader, format, ShapeStyle::Pulse);

        let ship_mesh = ShapeMesh::ship(&context.device);
        let reticle_mesh = ShapeMesh::reticle(&context.device);

        Ok(Self {
            context,
            ship_pipeline,
            reticle_pipeline,
            ship_mesh,
            reticle_mesh,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Render a single frame
    pub fn render_frame(&mut self, state: &GameState, ticks: f32) -> Result<(), RenderError> {
        let aspect = self.context.aspect_ratio();
        self.ship_pipeline.update_uniforms(
            &self.context.queue,
            &ship_uniforms(state, aspect, ticks, &self.render_config),
        );
        self.reticle_pipeline.update_uniforms(
            &self.context.queue,
            &reticle_uniforms(state, aspect, ticks),
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => return Err(RenderError::Timeout),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shape Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Reticle last so it stays on top of the ship
            self.ship_pipeline.draw(&mut render_pass, &self.ship_mesh);
            self.reticle_pipeline.draw(&mut render_pass, &self.reticle_mesh);
        }

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
