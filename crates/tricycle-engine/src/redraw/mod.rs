//! Redraw pacing.
//!
//! One frame is clear + draw + present. What triggers the next frame depends
//! on a single capability resolved at startup:
//! - with swap-completion events, each completion schedules one frame
//! - without them, the frame callback stays in the idle queue and runs on
//!   every idle dispatch

mod scheduler;
mod session;

pub use scheduler::{Redraw, RedrawScheduler};
pub use session::{Framebuffer, RenderSession};
