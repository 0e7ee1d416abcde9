use bytemuck::{Pod, Zeroable};

/// 2D position + RGBA8 color vertex.
///
/// Positions are in normalized device coordinates (+Y up). Colors are
/// straight alpha, normalized to `[0, 1]` by the vertex fetch.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct VertexP2C4 {
    pub x: f32,
    pub y: f32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl VertexP2C4 {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Unorm8x4   // color
    ];

    #[inline]
    pub const fn new(x: f32, y: f32, r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { x, y, r, g, b, a }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexP2C4>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
