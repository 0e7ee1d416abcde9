//! Time subsystem.
//!
//! Frame timing without coupling to the main loop:
//! - one `FrameClock` per onscreen
//! - call `tick()` once per presented frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameReport, FrameTime};
