use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn from_surface_size(width: u32, height: u32) -> Self {
        Rect::new(0.0, 0.0, width as f32, height as f32)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks the rectangle by `margin` on every edge.
    ///
    /// The result may be empty when `margin` exceeds half the smaller
    /// dimension; callers that draw the rect are expected to check
    /// [`is_empty`](Self::is_empty).
    #[inline]
    pub fn inset(self, margin: f32) -> Self {
        Rect::new(
            self.origin.x + margin,
            self.origin.y + margin,
            self.size.x - 2.0 * margin,
            self.size.y - 2.0 * margin,
        )
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < (self.origin.x + self.size.x)
            && p.y < (self.origin.y + self.size.y)
    }
}
