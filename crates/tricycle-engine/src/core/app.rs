use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::mainloop::IdleQueue;

use super::ctx::SetupCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by `MainLoop`.
///
/// Every callback runs on the loop thread and receives the app by `&mut`;
/// none of them is ever re-entered.
pub trait App: Sized + 'static {
    /// Called once, when the platform is ready for windows.
    ///
    /// Creates windows and GPU resources, attaches event sources and
    /// schedules the first idle callbacks. An error ends the loop.
    fn setup(&mut self, ctx: &mut SetupCtx<'_, Self>) -> Result<()>;

    /// Called once per `LoopEvent::SwapComplete`.
    fn on_swap_complete(&mut self, window_id: WindowId, idle: &mut IdleQueue<Self>) {
        let _ = (window_id, idle);
    }

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Polled after every loop iteration.
    fn control(&self) -> AppControl {
        AppControl::Continue
    }
}
