//! Paint model shared between the framebuffer seam and the GPU layer.
//!
//! Scope is color representation only; geometry lives in `primitive`.

pub mod color;

pub use color::Color;
