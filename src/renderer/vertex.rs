//! Vertex types for 2D sprite rendering

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

/// Palette for the compiled-in sprite art
pub mod colors {
    pub const SKY: [f32; 4] = [0.627, 0.847, 0.937, 1.0];
    pub const SEA: [f32; 4] = [0.13, 0.42, 0.68, 1.0];
    pub const SEA_DEEP: [f32; 4] = [0.08, 0.30, 0.54, 1.0];
    pub const FOAM: [f32; 4] = [0.92, 0.96, 1.0, 1.0];
    pub const HULL: [f32; 4] = [0.48, 0.28, 0.12, 1.0];
    pub const HULL_DARK: [f32; 4] = [0.35, 0.20, 0.08, 1.0];
    pub const SAIL: [f32; 4] = [0.97, 0.95, 0.88, 1.0];
    pub const MAST: [f32; 4] = [0.30, 0.22, 0.14, 1.0];
    pub const SPRAY_CORE: [f32; 4] = [0.95, 0.98, 1.0, 0.95];
    pub const SPRAY_MIST: [f32; 4] = [0.85, 0.93, 0.98, 0.6];
    pub const PELICAN_BODY: [f32; 4] = [0.96, 0.96, 0.94, 1.0];
    pub const PELICAN_WING: [f32; 4] = [0.55, 0.55, 0.58, 1.0];
    pub const PELICAN_BEAK: [f32; 4] = [0.95, 0.65, 0.25, 1.0];
    pub const BANNER: [f32; 4] = [0.12, 0.12, 0.18, 0.85];
    pub const BANNER_EDGE: [f32; 4] = [0.85, 0.75, 0.35, 1.0];
    pub const BANNER_TEXT: [f32; 4] = [0.95, 0.92, 0.85, 1.0];
}
