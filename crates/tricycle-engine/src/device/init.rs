/// How the swap-completion capability is resolved.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SwapEventMode {
    /// Detect from the selected backend.
    #[default]
    Auto,
    /// Never report swap completion; redraws fall back to idle polling.
    Disabled,
}

/// Initialization parameters for the rendering context.
///
/// Surface preferences are stored on the `Context` and applied when an
/// `Onscreen` is created for a window.
#[derive(Debug, Clone)]
pub struct ContextInit {
    /// Backends wgpu may pick from.
    pub backends: wgpu::Backends,

    pub power_preference: wgpu::PowerPreference,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability unless a feature is strictly necessary.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    pub swap_event: SwapEventMode,

    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default so vertex colors reach the screen unconverted.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). Falls back to FIFO when unsupported.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for ContextInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::default(),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            swap_event: SwapEventMode::Auto,
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            desired_maximum_frame_latency: 2,
        }
    }
}

/// The part of `ContextInit` that configures surfaces.
#[derive(Debug, Clone)]
pub(crate) struct SurfacePrefs {
    pub prefer_srgb: bool,
    pub present_mode: wgpu::PresentMode,
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub desired_maximum_frame_latency: u32,
}
