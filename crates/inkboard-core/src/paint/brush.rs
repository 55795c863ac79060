use super::Color;

/// Stroke brush for committing segments into the raster.
///
/// Caps and joins are always round — the capsule distance field used by the
/// rasterizer produces them without a separate join step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Brush {
    pub color: Color,
    /// Full stroke width in logical pixels.
    pub width: f32,
    /// When false, coverage is a hard threshold instead of a 1-pixel ramp.
    pub antialias: bool,
}

impl Brush {
    #[inline]
    pub const fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            antialias: true,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }
}
