//! Tricycle engine crate.
//!
//! This crate owns the platform + GPU pieces used by the hello program: a
//! rendering context, an onscreen surface, a static primitive and its
//! pipeline, and a host main loop that paces redraws.

pub mod core;
pub mod device;
pub mod mainloop;
pub mod redraw;
pub mod time;

pub mod logging;
pub mod paint;
pub mod pipeline;
pub mod primitive;
