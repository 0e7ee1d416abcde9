//! Render state used to shade primitives.
//!
//! Only the default pipeline exists: untextured, per-vertex color, straight
//! alpha blending.

mod pipeline;

pub use pipeline::Pipeline;
