//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

    /// Byte offset of `color` within a vertex, for vertex buffer layouts
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Raw bytes of a vertex list, ready to upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BALL: [f32; 4] = [0.0, 1.0, 0.3, 1.0];
    pub const PADDLE: [f32; 4] = [0.0, 1.0, 0.3, 1.0];
    pub const POWERUP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const LIFE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// Block colors by strength, weakest first
    pub const BLOCK_TIERS: [[f32; 4]; 5] = [
        [0.0, 0.7, 1.0, 1.0], // Cyan
        [0.0, 0.7, 0.0, 1.0], // Green
        [1.0, 0.8, 0.0, 1.0], // Yellow
        [0.9, 0.4, 0.0, 1.0], // Orange
        [0.9, 0.0, 0.0, 1.0], // Red
    ];
}
