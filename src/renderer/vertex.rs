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

    /// Floats per vertex when flattened for upload
    pub const FLOATS: usize = 6;
}

/// Raw bytes of a vertex list, ready for a GPU buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Flat `[x, y, r, g, b, a, ...]` view of a vertex list
pub fn as_floats(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

/// Linear blend between two colors
pub fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Colors for game elements
pub mod colors {
    /// Background gradient, top-left (#667eea)
    pub const BACKGROUND_START: [f32; 4] = [0.4, 0.494, 0.918, 1.0];
    /// Background gradient, bottom-right (#764ba2)
    pub const BACKGROUND_END: [f32; 4] = [0.463, 0.294, 0.635, 1.0];
    /// Coin center (#FFD700)
    pub const COIN_CORE: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
    /// Coin at 70% radius (#FFA500)
    pub const COIN_MID: [f32; 4] = [1.0, 0.647, 0.0, 1.0];
    /// Coin rim (#FF8C00)
    pub const COIN_RIM: [f32; 4] = [1.0, 0.549, 0.0, 1.0];
    /// Inner highlight (#FFFF99)
    pub const COIN_HIGHLIGHT: [f32; 4] = [1.0, 1.0, 0.6, 1.0];
    /// Glow, fading out
    pub const COIN_GLOW: [f32; 4] = [1.0, 0.843, 0.0, 0.45];
    pub const COIN_GLOW_EDGE: [f32; 4] = [1.0, 0.843, 0.0, 0.0];
}
