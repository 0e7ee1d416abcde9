use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::core::{App, AppControl, SetupCtx};

use super::{EventSource, IdleQueue, LoopEvent, Notifier};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub size: PhysicalSize<u32>,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "tricycle".to_string(),
            size: PhysicalSize::new(640, 480),
            resizable: true,
        }
    }
}

/// The host event loop.
///
/// Runs until the last window is closed or the app asks to exit; there is
/// no other stop condition.
pub struct MainLoop {
    event_loop: EventLoop<LoopEvent>,
}

impl MainLoop {
    pub fn new() -> Result<Self> {
        let event_loop = EventLoop::<LoopEvent>::with_user_event()
            .build()
            .context("failed to create winit EventLoop")?;

        Ok(Self { event_loop })
    }

    pub fn notifier(&self) -> Notifier {
        Notifier::new(self.event_loop.create_proxy())
    }

    /// Runs `app` to completion and hands it back.
    pub fn run<A: App>(self, app: A) -> Result<A> {
        let mut runner = Runner {
            state: LoopState::new(app),
            notifier: self.notifier(),
            started: false,
            failure: None,
        };

        self.event_loop
            .run_app(&mut runner)
            .context("winit event loop terminated with error")?;

        match runner.failure {
            Some(err) => Err(err),
            None => Ok(runner.state.app),
        }
    }
}

/// Everything the loop dispatches into. Kept apart from the winit handler
/// so one iteration can be driven without a platform event loop.
struct LoopState<A: App> {
    app: A,
    idle: IdleQueue<A>,
    sources: Vec<Box<dyn EventSource>>,
    exit_requested: bool,
}

impl<A: App> LoopState<A> {
    fn new(app: A) -> Self {
        Self {
            app,
            idle: IdleQueue::new(),
            sources: Vec::new(),
            exit_requested: false,
        }
    }

    /// One pass of the loop once platform events are drained: pump sources,
    /// then run idle callbacks. Returns how the loop should wait next.
    fn iterate(&mut self) -> ControlFlow {
        for source in &mut self.sources {
            source.dispatch();
        }

        self.idle.dispatch(&mut self.app);

        if self.app.control() == AppControl::Exit {
            self.exit_requested = true;
        }

        let busy = !self.idle.is_empty() || self.sources.iter().any(|s| s.is_pending());
        if busy { ControlFlow::Poll } else { ControlFlow::Wait }
    }

    fn handle_loop_event(&mut self, event: LoopEvent) {
        match event {
            LoopEvent::SwapComplete(id) => {
                log::trace!("swap complete on {id:?}");
                self.app.on_swap_complete(id, &mut self.idle);
            }
        }
    }

    fn handle_window_event(&mut self, window_id: WindowId, event: &WindowEvent) {
        if self.app.on_window_event(window_id, event) == AppControl::Exit {
            self.exit_requested = true;
        }

        // Single-window program: closing it ends the loop.
        if matches!(event, WindowEvent::CloseRequested) {
            log::info!("window {window_id:?} closed");
            self.exit_requested = true;
        }
    }
}

struct Runner<A: App> {
    state: LoopState<A>,
    notifier: Notifier,
    started: bool,
    failure: Option<anyhow::Error>,
}

impl<A: App> ApplicationHandler<LoopEvent> for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        let mut ctx = SetupCtx {
            event_loop,
            idle: &mut self.state.idle,
            sources: &mut self.state.sources,
            notifier: &self.notifier,
        };

        if let Err(err) = self.state.app.setup(&mut ctx) {
            log::error!("setup failed: {err:#}");
            self.failure = Some(err);
            event_loop.exit();
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: LoopEvent) {
        self.state.handle_loop_event(event);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        self.state.handle_window_event(window_id, &event);

        if self.state.exit_requested {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.exit_requested {
            event_loop.exit();
            return;
        }

        let flow = self.state.iterate();

        if self.state.exit_requested {
            event_loop.exit();
        } else {
            event_loop.set_control_flow(flow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    use crate::mainloop::IdleControl;

    #[derive(Default)]
    struct Probe {
        frames: u32,
        swaps: Vec<WindowId>,
        exit_after: Option<u32>,
    }

    impl App for Probe {
        fn setup(&mut self, _ctx: &mut SetupCtx<'_, Self>) -> Result<()> {
            Ok(())
        }

        fn on_swap_complete(&mut self, window_id: WindowId, idle: &mut IdleQueue<Self>) {
            self.swaps.push(window_id);
            idle.add(|p: &mut Probe| {
                p.frames += 1;
                IdleControl::Remove
            });
        }

        fn control(&self) -> AppControl {
            match self.exit_after {
                Some(n) if self.frames >= n => AppControl::Exit,
                _ => AppControl::Continue,
            }
        }
    }

    struct FakeSource {
        polls: Rc<Cell<u32>>,
        pending: bool,
    }

    impl EventSource for FakeSource {
        fn name(&self) -> &str {
            "fake"
        }

        fn dispatch(&mut self) {
            self.polls.set(self.polls.get() + 1);
        }

        fn is_pending(&self) -> bool {
            self.pending
        }
    }

    fn window() -> WindowId {
        WindowId::dummy()
    }

    #[test]
    fn idle_work_keeps_loop_polling() {
        let mut state = LoopState::new(Probe::default());
        state.idle.add(|p: &mut Probe| {
            p.frames += 1;
            IdleControl::Continue
        });

        assert_eq!(state.iterate(), ControlFlow::Poll);
        assert_eq!(state.iterate(), ControlFlow::Poll);
        assert_eq!(state.app.frames, 2);
    }

    #[test]
    fn loop_waits_when_nothing_is_scheduled() {
        let mut state = LoopState::new(Probe::default());
        state.idle.add(|p: &mut Probe| {
            p.frames += 1;
            IdleControl::Remove
        });

        // The one-shot runs, then nothing is left.
        assert_eq!(state.iterate(), ControlFlow::Wait);
        assert_eq!(state.app.frames, 1);
    }

    #[test]
    fn sources_are_pumped_every_iteration() {
        let polls = Rc::new(Cell::new(0));
        let mut state = LoopState::new(Probe::default());
        state.sources.push(Box::new(FakeSource {
            polls: Rc::clone(&polls),
            pending: true,
        }));

        assert_eq!(state.iterate(), ControlFlow::Poll);
        state.iterate();
        assert_eq!(polls.get(), 2);
    }

    #[test]
    fn swap_complete_schedules_instead_of_running() {
        let mut state = LoopState::new(Probe::default());

        state.handle_loop_event(LoopEvent::SwapComplete(window()));
        assert_eq!(state.app.swaps.len(), 1);
        assert_eq!(state.app.frames, 0, "handler must not run the frame inline");

        state.iterate();
        assert_eq!(state.app.frames, 1);
    }

    #[test]
    fn app_exit_request_is_observed() {
        let mut state = LoopState::new(Probe {
            exit_after: Some(1),
            ..Probe::default()
        });
        state.handle_loop_event(LoopEvent::SwapComplete(window()));

        state.iterate();
        assert!(state.exit_requested);
    }

    #[test]
    fn close_requested_ends_the_loop() {
        let mut state = LoopState::new(Probe::default());
        state.handle_window_event(window(), &WindowEvent::CloseRequested);
        assert!(state.exit_requested);
    }

    #[test]
    fn default_window_is_640_by_480() {
        assert_eq!(WindowConfig::default().size, PhysicalSize::new(640, 480));
    }
}
