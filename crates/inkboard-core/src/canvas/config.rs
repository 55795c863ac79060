use crate::paint::{Brush, Color};

/// Fixed drawing configuration for a canvas.
///
/// These are construction-time values, not runtime-tunable settings: the
/// canvas reads them on every event but never changes them.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Full stroke width in logical pixels.
    pub stroke_width: f32,

    /// Ink color for committed segments and the decorative frame.
    pub stroke: Color,

    /// Surface clear color, applied on every (re)allocation.
    pub background: Color,

    /// Margin from each surface edge to the decorative frame rectangle.
    pub frame_inset: f32,

    /// Minimum per-axis pointer movement before a move event commits a
    /// segment. Mirrors the platform touch-slop setting; movement below this
    /// on both axes is treated as jitter and dropped.
    pub touch_slop: f32,

    /// Antialias committed segments.
    pub antialias: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            stroke_width: 12.0,
            stroke: Color::from_srgb_u8(38, 44, 58, 255),
            background: Color::from_srgb_u8(250, 245, 235, 255),
            frame_inset: 40.0,
            touch_slop: 8.0,
            antialias: true,
        }
    }
}

impl CanvasConfig {
    /// Brush used for committing segments.
    #[inline]
    pub fn brush(&self) -> Brush {
        Brush {
            color: self.stroke,
            width: self.stroke_width,
            antialias: self.antialias,
        }
    }
}
