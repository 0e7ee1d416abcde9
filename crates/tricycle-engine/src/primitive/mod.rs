//! GPU-uploaded geometry.
//!
//! A `Primitive` is an immutable vertex buffer plus a topology tag. Vertex
//! formats are plain `#[repr(C)]` structs cast with `bytemuck`.

mod primitive;
mod vertex;

pub use primitive::{Geometry, Primitive, VerticesMode};
pub use vertex::VertexP2C4;
