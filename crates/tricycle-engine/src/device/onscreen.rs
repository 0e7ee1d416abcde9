use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context as _, Result};
use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowId};

use crate::mainloop::{LoopEvent, Notifier};
use crate::paint::Color;
use crate::pipeline::Pipeline;
use crate::primitive::Primitive;
use crate::redraw::Framebuffer;
use crate::time::FrameClock;

use super::frame::PendingFrame;
use super::surface::{self, SkippedSwap};
use super::{Context, SurfaceErrorAction};

/// A window-backed framebuffer.
///
/// Owns the wgpu surface for one window plus the frame being recorded.
/// Clears and draws are recorded into the current frame; `swap_buffers`
/// submits and presents it, then arranges the swap-completion notification
/// when a callback is registered.
pub struct Onscreen {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,

    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,

    shown: bool,

    frame: Option<PendingFrame>,

    /// Acquisition already failed for the frame in progress.
    skip_frame: bool,

    /// Set once a fatal surface error was seen.
    fatal: bool,

    skipped: SkippedSwap,

    swap_callback: Option<Notifier>,
    in_flight: Arc<AtomicUsize>,

    clock: FrameClock,
}

impl Onscreen {
    /// Creates the surface for `window` and configures it.
    ///
    /// The window should be created hidden; call `show` before drawing.
    pub fn new(ctx: &Context, window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let surface = ctx
            .instance()
            .create_surface(Arc::clone(&window))
            .context("failed to create wgpu surface")?;

        let caps = surface.get_capabilities(ctx.adapter());
        let prefs = ctx.surface_prefs();

        let format = surface::choose_surface_format(&caps.formats, prefs.prefer_srgb)
            .context("adapter cannot present to this window")?;
        let alpha_mode = surface::choose_alpha_mode(&caps.alpha_modes, prefs.alpha_mode);
        let present_mode = surface::choose_present_mode(&caps.present_modes, prefs.present_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: prefs.desired_maximum_frame_latency,
        };

        surface.configure(ctx.device(), &config);
        log::debug!("onscreen configured: {format:?} {present_mode:?} {}x{}", config.width, config.height);

        Ok(Self {
            window,
            surface,
            device: ctx.device().clone(),
            queue: ctx.queue().clone(),
            config,
            size,
            shown: false,
            frame: None,
            skip_frame: false,
            fatal: false,
            skipped: SkippedSwap::default(),
            swap_callback: None,
            in_flight: ctx.in_flight(),
            clock: FrameClock::new(),
        })
    }

    /// Makes the window visible. Draws before this are dropped.
    pub fn show(&mut self) {
        self.window.set_visible(true);
        if !self.shown {
            log::info!("onscreen {:?} shown", self.window.id());
        }
        self.shown = true;
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// True once the surface hit an unrecoverable error.
    pub fn has_fatal_error(&self) -> bool {
        self.fatal
    }

    /// Registers the swap-completion handler.
    ///
    /// After every `swap_buffers`, `LoopEvent::SwapComplete` is delivered to
    /// the main loop once the GPU has finished the submitted frame. Only
    /// meaningful when the context reports `FeatureId::SwapBuffersEvent`.
    pub fn add_swap_buffers_callback(&mut self, notifier: Notifier) {
        self.swap_callback = Some(notifier);
    }

    /// Reconfigures the surface after a resize.
    ///
    /// Restoring a minimized window releases the completion its last empty
    /// swap withheld.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if surface::apply_resize(&mut self.config, &mut self.size, new_size) {
            self.surface.configure(&self.device, &self.config);
        }
        if self.skipped.on_resize(new_size) {
            self.notify_swap_complete();
        }
    }

    /// Returns the frame being recorded, acquiring one if needed.
    fn ensure_frame(&mut self) -> Option<&mut PendingFrame> {
        if self.frame.is_none() {
            if !self.shown {
                log::warn!("draw targets onscreen {:?} before show(); ignored", self.window.id());
                return None;
            }
            if self.skip_frame || self.size.width == 0 || self.size.height == 0 {
                return None;
            }

            match self.surface.get_current_texture() {
                Ok(surface_texture) => {
                    let view = surface_texture
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());
                    let encoder = self
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("tricycle frame encoder"),
                        });
                    self.frame = Some(PendingFrame {
                        surface_texture,
                        view,
                        encoder,
                    });
                }
                Err(err) => {
                    self.handle_surface_error(err);
                    return None;
                }
            }
        }

        self.frame.as_mut()
    }

    fn handle_surface_error(&mut self, err: wgpu::SurfaceError) {
        self.skip_frame = true;

        match surface::classify_surface_error(&err) {
            SurfaceErrorAction::Reconfigured => {
                log::debug!("surface {err}; reconfiguring");
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
            }
            SurfaceErrorAction::SkipFrame => log::warn!("surface {err}; skipping frame"),
            SurfaceErrorAction::Fatal => {
                log::error!("surface {err}; giving up");
                self.fatal = true;
            }
        }
    }

    fn notify_swap_complete(&self) {
        if let Some(notifier) = &self.swap_callback {
            notifier.notify(LoopEvent::SwapComplete(self.window.id()));
        }
    }
}

impl Framebuffer for Onscreen {
    type Pipeline = Pipeline;
    type Primitive = Primitive;

    fn clear4f(&mut self, color: Color) {
        let Some(frame) = self.ensure_frame() else { return };

        let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tricycle clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }

    fn draw_primitive(&mut self, pipeline: &Pipeline, primitive: &Primitive) {
        if pipeline.format() != self.config.format {
            log::warn!(
                "pipeline built for {:?}, onscreen uses {:?}; draw skipped",
                pipeline.format(),
                self.config.format
            );
            return;
        }

        let Some(frame) = self.ensure_frame() else { return };

        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tricycle primitive pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline.for_mode(primitive.mode()));
        rpass.set_vertex_buffer(0, primitive.buffer().slice(..));
        rpass.draw(0..primitive.n_vertices(), 0..1);
    }

    fn swap_buffers(&mut self) {
        self.skip_frame = false;

        let Some(PendingFrame {
            surface_texture,
            view,
            encoder,
        }) = self.frame.take()
        else {
            // Nothing was acquired. Keep swap-event pacing alive unless minimized.
            if self.skipped.on_empty_swap(self.swap_callback.is_some(), self.size) {
                self.notify_swap_complete();
            }
            return;
        };

        self.queue.submit(std::iter::once(encoder.finish()));

        if let Some(notifier) = &self.swap_callback {
            let notifier = notifier.clone();
            let in_flight = Arc::clone(&self.in_flight);
            let id = self.window.id();

            in_flight.fetch_add(1, Ordering::AcqRel);
            self.queue.on_submitted_work_done(move || {
                in_flight.fetch_sub(1, Ordering::AcqRel);
                notifier.notify(LoopEvent::SwapComplete(id));
            });
        }

        drop(view);
        self.window.pre_present_notify();
        surface_texture.present();

        let ft = self.clock.tick();
        log::trace!("presented frame {} (dt {:.4}s)", ft.frame_index, ft.dt);
        if let Some(report) = self.clock.take_report() {
            log::debug!(
                "{} frames presented, {:.1} fps over the last window",
                report.total_frames,
                report.fps()
            );
        }
    }
}
