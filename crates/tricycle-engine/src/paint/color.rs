/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Used for framebuffer clears. Per-vertex colors are `[u8; 4]` and live on
/// `primitive::VertexP2C4`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque black, the clear color of every frame.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight RGBA bytes (`0`–`255`).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to [0, 1].
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Converts to the `wgpu` clear color (f64 channels).
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        let c = self.clamped();
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_opaque() {
        assert_eq!(Color::BLACK, Color::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn from_rgba_u8_scales_to_unit_range() {
        let c = Color::from_rgba_u8(255, 0, 0, 0x80);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn to_wgpu_clamps_out_of_range_channels() {
        let w = Color::new(2.0, -1.0, 0.5, 1.0).to_wgpu();
        assert_eq!(w.r, 1.0);
        assert_eq!(w.g, 0.0);
        assert_eq!(w.b, 0.5);
        assert_eq!(w.a, 1.0);
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Color::new(f32::NAN, 0.0, 0.0, 1.0).is_finite());
        assert!(Color::BLACK.is_finite());
    }
}
