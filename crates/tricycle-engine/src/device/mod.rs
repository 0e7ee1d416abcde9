//! Rendering context + onscreen surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue (`Context`)
//! - resolving the backend feature set once at startup
//! - creating & configuring the window surface (`Onscreen`)
//! - recording clears/draws into the current frame and presenting it

mod context;
mod error;
mod features;
mod frame;
mod init;
mod onscreen;
mod surface;

pub use context::Context;
pub use error::{ContextError, SurfaceErrorAction};
pub use features::{FeatureFlags, FeatureId};
pub use init::{ContextInit, SwapEventMode};
pub use onscreen::Onscreen;
