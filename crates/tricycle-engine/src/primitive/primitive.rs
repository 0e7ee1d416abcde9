use wgpu::util::DeviceExt;

use crate::device::Context;

use super::VertexP2C4;

/// How consecutive vertices are assembled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VerticesMode {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
}

impl VerticesMode {
    pub const ALL: [VerticesMode; 5] = [
        VerticesMode::Points,
        VerticesMode::Lines,
        VerticesMode::LineStrip,
        VerticesMode::Triangles,
        VerticesMode::TriangleStrip,
    ];

    pub fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            VerticesMode::Points => wgpu::PrimitiveTopology::PointList,
            VerticesMode::Lines => wgpu::PrimitiveTopology::LineList,
            VerticesMode::LineStrip => wgpu::PrimitiveTopology::LineStrip,
            VerticesMode::Triangles => wgpu::PrimitiveTopology::TriangleList,
            VerticesMode::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
        }
    }

    /// Position in `ALL`.
    pub(crate) fn index(self) -> usize {
        match self {
            VerticesMode::Points => 0,
            VerticesMode::Lines => 1,
            VerticesMode::LineStrip => 2,
            VerticesMode::Triangles => 3,
            VerticesMode::TriangleStrip => 4,
        }
    }

    /// Whether `n` vertices form only whole primitives.
    pub fn is_complete(self, n: usize) -> bool {
        match self {
            VerticesMode::Points => true,
            VerticesMode::Lines => n % 2 == 0,
            VerticesMode::LineStrip => n != 1,
            VerticesMode::Triangles => n % 3 == 0,
            VerticesMode::TriangleStrip => n == 0 || n >= 3,
        }
    }
}

/// CPU-side vertex data plus topology.
///
/// Built once and never writable afterwards. `Primitive` uploads exactly
/// these bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    mode: VerticesMode,
    vertices: Box<[VertexP2C4]>,
}

impl Geometry {
    pub fn new_p2c4(mode: VerticesMode, vertices: &[VertexP2C4]) -> Self {
        if !mode.is_complete(vertices.len()) {
            log::warn!(
                "{} vertices do not form whole {mode:?} primitives; trailing vertices are ignored",
                vertices.len()
            );
        }

        Self {
            mode,
            vertices: vertices.into(),
        }
    }

    pub fn mode(&self) -> VerticesMode {
        self.mode
    }

    pub fn n_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// The exact bytes uploaded to the GPU.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Immutable geometry uploaded to the GPU.
///
/// The CPU copy is kept so callers can inspect the uploaded bytes; neither
/// copy is writable after construction.
pub struct Primitive {
    geometry: Geometry,
    buffer: wgpu::Buffer,
}

impl Primitive {
    /// Uploads `vertices` as a vertex-only buffer.
    pub fn new_p2c4(ctx: &Context, mode: VerticesMode, vertices: &[VertexP2C4]) -> Self {
        let geometry = Geometry::new_p2c4(mode, vertices);

        let buffer = ctx
            .device()
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("tricycle primitive vbo"),
                contents: geometry.vertex_bytes(),
                usage: wgpu::BufferUsages::VERTEX,
            });

        log::debug!("primitive uploaded: {mode:?}, {} vertices", geometry.n_vertices());

        Self { geometry, buffer }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn mode(&self) -> VerticesMode {
        self.geometry.mode()
    }

    pub fn n_vertices(&self) -> u32 {
        self.geometry.n_vertices()
    }

    pub(crate) fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, mode) in VerticesMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn triangles_need_multiples_of_three() {
        assert!(VerticesMode::Triangles.is_complete(3));
        assert!(VerticesMode::Triangles.is_complete(6));
        assert!(!VerticesMode::Triangles.is_complete(4));
    }

    #[test]
    fn strips_need_enough_vertices() {
        assert!(!VerticesMode::TriangleStrip.is_complete(2));
        assert!(VerticesMode::TriangleStrip.is_complete(4));
        assert!(!VerticesMode::LineStrip.is_complete(1));
    }

    #[test]
    fn geometry_bytes_are_the_packed_vertices() {
        let vertices = [
            VertexP2C4::new(0.0, 0.7, 0xff, 0x00, 0x00, 0x80),
            VertexP2C4::new(-0.7, -0.7, 0x00, 0xff, 0x00, 0xff),
            VertexP2C4::new(0.7, -0.7, 0x00, 0x00, 0xff, 0xff),
        ];
        let geometry = Geometry::new_p2c4(VerticesMode::Triangles, &vertices);

        assert_eq!(geometry.n_vertices(), 3);
        assert_eq!(geometry.mode(), VerticesMode::Triangles);
        assert_eq!(geometry.vertex_bytes(), bytemuck::cast_slice::<_, u8>(&vertices));
        assert_eq!(&geometry.vertex_bytes()[8..12], &[0xff, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn triangles_map_to_triangle_list() {
        assert_eq!(
            VerticesMode::Triangles.topology(),
            wgpu::PrimitiveTopology::TriangleList
        );
    }
}
