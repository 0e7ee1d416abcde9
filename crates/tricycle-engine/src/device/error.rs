use thiserror::Error;

/// Failure to create the rendering context.
///
/// Unrecoverable: the binary prints the message and exits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("{0}")]
    CreationFailed(String),
}

impl ContextError {
    /// Human-readable diagnostic carried by the failure.
    pub fn message(&self) -> &str {
        match self {
            ContextError::CreationFailed(msg) => msg,
        }
    }
}

impl From<wgpu::RequestAdapterError> for ContextError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        ContextError::CreationFailed(format!("no suitable GPU adapter: {err}"))
    }
}

impl From<wgpu::RequestDeviceError> for ContextError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        ContextError::CreationFailed(format!("failed to create device: {err}"))
    }
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = ContextError::CreationFailed("no adapter".into());
        assert_eq!(err.to_string(), "no adapter");
        assert_eq!(err.message(), "no adapter");
    }
}
