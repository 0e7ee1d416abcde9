use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::device::Context;

/// Work the main loop must pump on every iteration.
pub trait EventSource {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Processes whatever is ready. Must not block.
    fn dispatch(&mut self);

    /// True while the source expects more work soon; the loop then keeps
    /// iterating instead of sleeping.
    fn is_pending(&self) -> bool;
}

/// Bridges the rendering device into the main loop.
///
/// wgpu fires queue completion callbacks from `Device::poll`; this source
/// polls without blocking on every iteration, and reports itself pending
/// while swap notifications are still in flight.
pub struct DeviceSource {
    device: wgpu::Device,
    in_flight: Arc<AtomicUsize>,
}

impl DeviceSource {
    pub fn new(ctx: &Context) -> Self {
        Self {
            device: ctx.device().clone(),
            in_flight: ctx.in_flight(),
        }
    }
}

impl EventSource for DeviceSource {
    fn name(&self) -> &str {
        "device"
    }

    fn dispatch(&mut self) {
        if let Err(err) = self.device.poll(wgpu::PollType::Poll) {
            log::warn!("device poll failed: {err}");
        }
    }

    fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }
}
