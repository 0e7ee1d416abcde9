use crate::device::{Context, FeatureId};
use crate::mainloop::{IdleControl, IdleQueue, SourceId};
use crate::paint::Color;

use super::{Framebuffer, RenderSession};

/// Loop state that owns a scheduler and a render session.
///
/// Idle callbacks only receive the loop state, so the scheduler reaches its
/// session through this.
pub trait Redraw: 'static {
    type Target: Framebuffer;

    /// `None` until the session exists; a frame scheduled before that is dropped.
    fn redraw_parts(&mut self) -> Option<(&mut RedrawScheduler, &mut RenderSession<Self::Target>)>;
}

/// Decides when the next frame is drawn.
#[derive(Debug)]
pub struct RedrawScheduler {
    has_swap_event: bool,
    frames: u64,
}

impl RedrawScheduler {
    pub fn new(has_swap_event: bool) -> Self {
        Self {
            has_swap_event,
            frames: 0,
        }
    }

    /// Resolves the pacing mode from the context feature set.
    pub fn for_context(ctx: &Context) -> Self {
        Self::new(ctx.has_feature(FeatureId::SwapBuffersEvent))
    }

    pub fn has_swap_event(&self) -> bool {
        self.has_swap_event
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draws one frame, then says whether the idle callback that ran it stays.
    ///
    /// With swap events the callback is one-shot: the next frame comes from
    /// `on_swap_complete`. Without them it stays registered forever.
    pub fn on_frame_opportunity<F: Framebuffer>(
        &mut self,
        session: &mut RenderSession<F>,
    ) -> IdleControl {
        session.paint(Color::BLACK);
        self.frames += 1;

        if self.has_swap_event {
            IdleControl::Remove
        } else {
            IdleControl::Continue
        }
    }

    /// Schedules the first frame. Always goes through the idle queue, never
    /// draws inline.
    pub fn start<R: Redraw>(&self, idle: &mut IdleQueue<R>) -> SourceId {
        log::debug!(
            "redraw scheduler started ({})",
            if self.has_swap_event { "swap-event paced" } else { "idle polling" }
        );
        idle.add(frame_opportunity::<R>)
    }

    /// Handles one completed swap by scheduling exactly one frame.
    ///
    /// Ignored in polling mode, where the frame callback already reschedules
    /// itself.
    pub fn on_swap_complete<R: Redraw>(&self, idle: &mut IdleQueue<R>) -> Option<SourceId> {
        if !self.has_swap_event {
            log::debug!("swap completion while polling; ignored");
            return None;
        }

        Some(idle.add(frame_opportunity::<R>))
    }
}

fn frame_opportunity<R: Redraw>(state: &mut R) -> IdleControl {
    match state.redraw_parts() {
        Some((scheduler, session)) => scheduler.on_frame_opportunity(session),
        None => {
            log::warn!("frame scheduled without a render session; dropped");
            IdleControl::Remove
        }
    }
}
