//! Paint model for the CPU raster.
//!
//! Scope:
//! - color representation (straight-alpha RGBA, `f32` channels)
//! - the stroke brush (solid color, fixed width, round caps/joins)
//!
//! Geometry types remain in `coords`.

mod brush;
mod color;

pub use brush::Brush;
pub use color::Color;
