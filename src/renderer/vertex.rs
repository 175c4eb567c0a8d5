//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements; vehicle bodies come from the sim palette
pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.81, 0.98, 1.0];
    pub const ROAD: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const GRASS: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const LANE_STRIPE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CAR_WINDOW: [f32; 4] = [0.7, 0.8, 0.9, 1.0];
    pub const WHEEL: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    pub const SKIN: [f32; 4] = [0.96, 0.80, 0.69, 1.0];
    pub const SHIRT: [f32; 4] = [0.0, 0.5, 1.0, 1.0];
    pub const PANTS: [f32; 4] = [0.2, 0.2, 0.6, 1.0];
    pub const EYE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Lift an RGB palette entry into RGBA
#[inline]
pub fn rgba(rgb: [f32; 3]) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], 1.0]
}
