/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// The raster stores 8-bit straight-alpha pixels; blending happens in `f32`
/// and converts back with [`to_rgba8`](Self::to_rgba8). Premultiplication is
/// not used — the surface composites against an opaque background, so
/// straight alpha keeps the u8 round-trip exact for opaque paints.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    ///
    /// Preferred constructor for colors written as hex-style literals.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Converts to 8-bit channels, rounding to nearest.
    ///
    /// Channels are clamped to `[0, 1]` first, so out-of-range inputs cannot
    /// wrap.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}
