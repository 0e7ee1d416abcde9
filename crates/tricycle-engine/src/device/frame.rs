/// The frame currently being recorded on an onscreen.
///
/// Acquired lazily by the first clear or draw after a swap, finalized by the
/// next swap. Holding the surface texture prevents acquisition of subsequent
/// frames.
pub(crate) struct PendingFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
