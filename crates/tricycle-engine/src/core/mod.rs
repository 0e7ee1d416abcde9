//! Core engine-facing contracts.
//!
//! Defines the interface between the main loop and the application: the
//! `App` callbacks and the context handed to `App::setup`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::SetupCtx;
