use anyhow::{Context as _, Result};
use winit::event::WindowEvent;
use winit::window::WindowId;

use tricycle_engine::core::{App, AppControl, SetupCtx};
use tricycle_engine::device::{Context, Onscreen};
use tricycle_engine::mainloop::{DeviceSource, IdleQueue, WindowConfig};
use tricycle_engine::pipeline::Pipeline;
use tricycle_engine::primitive::{Primitive, VertexP2C4, VerticesMode};
use tricycle_engine::redraw::{Redraw, RedrawScheduler, RenderSession};

/// The triangle, in NDC with +Y up. The top vertex is half transparent.
pub const TRIANGLE_VERTICES: [VertexP2C4; 3] = [
    VertexP2C4::new(0.0, 0.7, 0xff, 0x00, 0x00, 0x80),
    VertexP2C4::new(-0.7, -0.7, 0x00, 0xff, 0x00, 0xff),
    VertexP2C4::new(0.7, -0.7, 0x00, 0x00, 0xff, 0xff),
];

/// Application state: the context plus everything built once the window exists.
pub struct Hello {
    context: Context,
    window: WindowConfig,
    scheduler: RedrawScheduler,
    session: Option<RenderSession<Onscreen>>,
}

impl Hello {
    pub fn new(context: Context, window: WindowConfig) -> Self {
        let scheduler = RedrawScheduler::for_context(&context);
        Self {
            context,
            window,
            scheduler,
            session: None,
        }
    }

    /// True when the surface hit an unrecoverable error.
    pub fn has_fatal_error(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.framebuffer().has_fatal_error())
    }

    pub fn frames(&self) -> u64 {
        self.scheduler.frames()
    }
}

impl App for Hello {
    fn setup(&mut self, ctx: &mut SetupCtx<'_, Self>) -> Result<()> {
        let window = ctx.create_window(&self.window)?;
        let mut onscreen =
            Onscreen::new(&self.context, window).context("failed to create onscreen")?;
        onscreen.show();

        let triangle =
            Primitive::new_p2c4(&self.context, VerticesMode::Triangles, &TRIANGLE_VERTICES);
        let pipeline = Pipeline::new(&self.context, onscreen.surface_format());

        ctx.attach_source(DeviceSource::new(&self.context));

        if self.scheduler.has_swap_event() {
            onscreen.add_swap_buffers_callback(ctx.notifier());
        }

        self.session = Some(RenderSession::new(onscreen, pipeline, triangle));
        self.scheduler.start(ctx.idle());

        Ok(())
    }

    fn on_swap_complete(&mut self, _window_id: WindowId, idle: &mut IdleQueue<Self>) {
        self.scheduler.on_swap_complete(idle);
    }

    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::Resized(size) = event {
            if let Some(session) = self.session.as_mut() {
                session.framebuffer_mut().resize(*size);
            }
        }
        AppControl::Continue
    }

    fn control(&self) -> AppControl {
        if self.has_fatal_error() {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }
}

impl Redraw for Hello {
    type Target = Onscreen;

    fn redraw_parts(&mut self) -> Option<(&mut RedrawScheduler, &mut RenderSession<Onscreen>)> {
        let session = self.session.as_mut()?;
        Some((&mut self.scheduler, session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tricycle_engine::primitive::Geometry;

    #[test]
    fn triangle_is_one_whole_triangle() {
        assert!(VerticesMode::Triangles.is_complete(TRIANGLE_VERTICES.len()));
        assert_eq!(TRIANGLE_VERTICES.len(), 3);
    }

    #[test]
    fn triangle_vertex_bytes() {
        let geometry = Geometry::new_p2c4(VerticesMode::Triangles, &TRIANGLE_VERTICES);
        let bytes = geometry.vertex_bytes();
        assert_eq!(bytes.len(), 36);
        assert_eq!(&bytes[8..12], &[0xff, 0x00, 0x00, 0x80]);
        assert_eq!(&bytes[20..24], &[0x00, 0xff, 0x00, 0xff]);
        assert_eq!(&bytes[32..36], &[0x00, 0x00, 0xff, 0xff]);
    }

    #[test]
    fn triangle_winds_counter_clockwise() {
        let [a, b, c] = TRIANGLE_VERTICES;
        let area2 = (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y);
        assert!(area2 > 0.0);
    }
}
