use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use super::init::SurfacePrefs;
use super::{ContextError, ContextInit, FeatureFlags, FeatureId};

/// Top-level rendering context.
///
/// Owns the wgpu core objects:
/// - Instance/Adapter/Device/Queue
/// - the feature set resolved at creation
/// - the counter of swap notifications still waiting on the GPU
///
/// Created once per process, before any window exists.
pub struct Context {
    instance: wgpu::Instance,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,

    features: FeatureFlags,
    surface_prefs: SurfacePrefs,

    /// Submitted frames whose completion callback has not fired yet.
    in_flight: Arc<AtomicUsize>,
}

impl Context {
    /// Creates a context, blocking on adapter/device acquisition.
    pub fn new(init: ContextInit) -> Result<Self, ContextError> {
        pollster::block_on(Self::new_async(init))
    }

    /// Creates a context.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new_async(init: ContextInit) -> Result<Self, ContextError> {
        let ContextInit {
            backends,
            power_preference,
            required_features,
            required_limits,
            swap_event,
            prefer_srgb,
            present_mode,
            alpha_mode,
            desired_maximum_frame_latency,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        // No window exists yet; surface compatibility is checked by `Onscreen::new`.
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await?;

        let info = adapter.get_info();
        log::info!("using adapter {:?} ({:?} backend)", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("tricycle device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await?;

        let features = FeatureFlags::detect(info.backend, swap_event);
        log::info!(
            "swap-buffers event: {}",
            if features.has(FeatureId::SwapBuffersEvent) { "supported" } else { "unsupported, polling" }
        );

        Ok(Self {
            instance,
            adapter,
            device,
            queue,
            features,
            surface_prefs: SurfacePrefs {
                prefer_srgb,
                present_mode,
                alpha_mode,
                desired_maximum_frame_latency,
            },
            in_flight: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Queries the feature set resolved at creation. Stable for the context lifetime.
    pub fn has_feature(&self, id: FeatureId) -> bool {
        self.features.has(id)
    }

    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }

    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub(crate) fn surface_prefs(&self) -> &SurfacePrefs {
        &self.surface_prefs
    }

    pub(crate) fn in_flight(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.in_flight)
    }
}
