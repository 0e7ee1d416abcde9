use super::SwapEventMode;

/// Backend capabilities that can be queried with `Context::has_feature`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum FeatureId {
    /// The backend notifies when a requested buffer swap has completed.
    SwapBuffersEvent,
}

/// Capability set resolved once when the context is created.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FeatureFlags {
    swap_buffers_event: bool,
}

impl FeatureFlags {
    /// Resolves the capability set for `backend`.
    ///
    /// Swap completion is reported through queue work-done callbacks, which
    /// the device event source dispatches on every loop iteration. Only the
    /// native explicit APIs are trusted to fire them per presented frame; GL
    /// and the browser backend poll through idle callbacks instead.
    pub fn detect(backend: wgpu::Backend, mode: SwapEventMode) -> Self {
        let native = matches!(
            backend,
            wgpu::Backend::Vulkan | wgpu::Backend::Metal | wgpu::Backend::Dx12
        );

        Self {
            swap_buffers_event: mode == SwapEventMode::Auto && native,
        }
    }

    pub fn has(&self, id: FeatureId) -> bool {
        match id {
            FeatureId::SwapBuffersEvent => self.swap_buffers_event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_backends_report_swap_events() {
        for backend in [wgpu::Backend::Vulkan, wgpu::Backend::Metal, wgpu::Backend::Dx12] {
            let flags = FeatureFlags::detect(backend, SwapEventMode::Auto);
            assert!(flags.has(FeatureId::SwapBuffersEvent), "{backend:?}");
        }
    }

    #[test]
    fn gl_polls() {
        let flags = FeatureFlags::detect(wgpu::Backend::Gl, SwapEventMode::Auto);
        assert!(!flags.has(FeatureId::SwapBuffersEvent));
    }

    #[test]
    fn disabled_mode_overrides_detection() {
        let flags = FeatureFlags::detect(wgpu::Backend::Vulkan, SwapEventMode::Disabled);
        assert!(!flags.has(FeatureId::SwapBuffersEvent));
    }
}
