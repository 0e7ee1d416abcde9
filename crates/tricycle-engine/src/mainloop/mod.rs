//! Host main loop.
//!
//! Owns the `winit` EventLoop and layers an idle-callback queue and pollable
//! event sources on top of it:
//! - idle callbacks run once per loop iteration until they ask to be removed
//! - event sources are dispatched every iteration and keep the loop awake
//!   while they have work in flight
//! - notifications from other threads arrive as `LoopEvent`s

mod idle;
mod notify;
mod runtime;
mod source;

pub use idle::{IdleControl, IdleQueue, SourceId};
pub use notify::{LoopEvent, Notifier};
pub use runtime::{MainLoop, WindowConfig};
pub use source::{DeviceSource, EventSource};
