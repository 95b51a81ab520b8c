//! Shape meshes
//!
//! Both shapes are defined around the origin; position, rotation, and scale
//! come from uniforms at draw time, so the buffers never change after upload.

use wgpu::util::DeviceExt;

use crate::pipeline::ShapeVertex;

/// Ship triangle, nose pointing along +x
pub const SHIP_VERTICES: [ShapeVertex; 3] = [
    ShapeVertex::new(0.75, 0.0),
    ShapeVertex::new(-0.75, 0.75),
    ShapeVertex::new(-0.75, -0.75),
];
pub const SHIP_INDICES: [u16; 3] = [0, 1, 2];

/// Reticle square, 0.2 units across
pub const RETICLE_VERTICES: [ShapeVertex; 4] = [
    ShapeVertex::new(0.1, 0.1),
    ShapeVertex::new(0.1, -0.1),
    ShapeVertex::new(-0.1, -0.1),
    ShapeVertex::new(-0.1, 0.1),
];
pub const RETICLE_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Vertex and index buffers for one shape
pub struct ShapeMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl ShapeMesh {
    /// Upload a mesh to the GPU
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[ShapeVertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    /// The ship triangle
    pub fn ship(device: &wgpu::Device) -> Self {
        Self::new(device, "Ship", &SHIP_VERTICES, &SHIP_INDICES)
    }

    /// The reticle square
    pub fn reticle(device: &wgpu::Device) -> Self {
        Self::new(device, "Reticle", &RETICLE_VERTICES, &RETICLE_INDICES)
    }
}
