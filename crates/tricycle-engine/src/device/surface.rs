use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;

    let preferred: &[wgpu::TextureFormat] = if prefer_srgb {
        &[wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb]
    } else {
        &[wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Rgba8Unorm]
    };

    Some(
        preferred
            .iter()
            .copied()
            .find(|f| formats.contains(f))
            .unwrap_or(first),
    )
}

pub(crate) fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

pub(crate) fn choose_present_mode(
    modes: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if modes.contains(&requested) {
        requested
    } else {
        // FIFO is the one mode every surface must support.
        wgpu::PresentMode::Fifo
    }
}

/// Updates `config` for `new_size`.
///
/// Returns `false` for a zero-area size; wgpu rejects configuring those, so
/// configuration is deferred until the next non-zero resize.
pub(crate) fn apply_resize(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;

    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

/// Decides whether a swap that presented nothing still forwards a completion.
///
/// A zero-area window (minimized) withholds the completion so swap-event
/// pacing parks instead of spinning; the next non-zero resize releases it.
#[derive(Debug, Default)]
pub(crate) struct SkippedSwap {
    withheld: bool,
}

impl SkippedSwap {
    /// Called when `swap_buffers` had no frame. Returns `true` to notify now.
    pub(crate) fn on_empty_swap(&mut self, has_callback: bool, size: PhysicalSize<u32>) -> bool {
        if !has_callback {
            return false;
        }
        if size.width == 0 || size.height == 0 {
            self.withheld = true;
            return false;
        }
        true
    }

    /// Called on resize. Returns `true` when a withheld completion must be sent.
    pub(crate) fn on_resize(&mut self, size: PhysicalSize<u32>) -> bool {
        if size.width == 0 || size.height == 0 {
            return false;
        }
        std::mem::take(&mut self.withheld)
    }
}

/// Maps an acquisition error to the action the onscreen takes.
///
/// `Reconfigured` means the caller must configure the surface again before
/// the next acquisition.
pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
