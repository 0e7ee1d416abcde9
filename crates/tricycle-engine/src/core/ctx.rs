use std::sync::Arc;

use anyhow::{Context, Result};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::mainloop::{EventSource, IdleQueue, Notifier, WindowConfig};

/// Context passed to `App::setup`.
///
/// Lifetimes:
/// - `'a` is the duration of the setup callback
pub struct SetupCtx<'a, A> {
    pub(crate) event_loop: &'a ActiveEventLoop,
    pub(crate) idle: &'a mut IdleQueue<A>,
    pub(crate) sources: &'a mut Vec<Box<dyn EventSource>>,
    pub(crate) notifier: &'a Notifier,
}

impl<'a, A> SetupCtx<'a, A> {
    /// Creates a window from `config`. It stays hidden until shown.
    pub fn create_window(&self, config: &WindowConfig) -> Result<Arc<Window>> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.size)
            .with_resizable(config.resizable)
            .with_visible(false);

        let window = self
            .event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(Arc::new(window))
    }

    /// Attaches a source dispatched on every loop iteration for the rest of the run.
    pub fn attach_source<S>(&mut self, source: S)
    where
        S: EventSource + 'static,
    {
        log::debug!("event source {:?} attached", source.name());
        self.sources.push(Box::new(source));
    }

    pub fn idle(&mut self) -> &mut IdleQueue<A> {
        &mut *self.idle
    }

    /// Handle for delivering `LoopEvent`s from completion callbacks.
    pub fn notifier(&self) -> Notifier {
        self.notifier.clone()
    }
}
