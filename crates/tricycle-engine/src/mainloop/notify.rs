use winit::event_loop::EventLoopProxy;
use winit::window::WindowId;

/// Events delivered to the main loop from outside its callbacks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LoopEvent {
    /// A buffer swap on this window finished on the GPU.
    SwapComplete(WindowId),
}

/// Sends `LoopEvent`s to the main loop. Cloneable and `Send`.
#[derive(Clone)]
pub struct Notifier {
    proxy: EventLoopProxy<LoopEvent>,
}

impl Notifier {
    pub(crate) fn new(proxy: EventLoopProxy<LoopEvent>) -> Self {
        Self { proxy }
    }

    /// Queues `event`; the loop handles it on its own thread.
    ///
    /// Dropped silently once the loop has exited.
    pub fn notify(&self, event: LoopEvent) {
        if let Err(err) = self.proxy.send_event(event) {
            log::debug!("main loop gone, dropping {:?}", err.0);
        }
    }
}
