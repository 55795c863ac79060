use crate::coords::Vec2;
use crate::paint::Brush;
use crate::path::flatten_quad;

use super::PixelSurface;

/// Commits one quadratic segment into the surface.
///
/// The curve is flattened to a polyline first; each edge is then stroked as
/// a round-capped thick segment. Round joins fall out of overlapping caps.
pub fn stroke_quad(surface: &mut PixelSurface, p0: Vec2, ctrl: Vec2, to: Vec2, brush: &Brush) {
    let mut points = Vec::new();
    flatten_quad(p0, ctrl, to, &mut points);
    stroke_polyline(surface, &points, brush);
}

/// Strokes a polyline with round caps and joins.
pub fn stroke_polyline(surface: &mut PixelSurface, points: &[Vec2], brush: &Brush) {
    match points {
        [] => {}
        [p] => stroke_segment(surface, *p, *p, brush),
        _ => {
            for edge in points.windows(2) {
                stroke_segment(surface, edge[0], edge[1], brush);
            }
        }
    }
}

/// Strokes a single thick segment as a capsule distance field.
///
/// Every pixel whose center lies within `radius + 0.5` of the segment gets
/// coverage from a 1-pixel linear ramp (or a hard `radius` threshold when
/// the brush disables antialiasing). Pixels outside the surface are skipped
/// by the blend, so arbitrary off-surface geometry is safe.
fn stroke_segment(surface: &mut PixelSurface, a: Vec2, b: Vec2, brush: &Brush) {
    if !a.is_finite() || !b.is_finite() {
        return;
    }

    let r = brush.radius();
    if r <= 0.0 {
        return;
    }

    let reach = r + 1.0;
    let min_x = a.x.min(b.x) - reach;
    let max_x = a.x.max(b.x) + reach;
    let min_y = a.y.min(b.y) - reach;
    let max_y = a.y.max(b.y) + reach;

    let x0 = (min_x.floor() as i64).max(0);
    let x1 = (max_x.ceil() as i64).min(surface.width() as i64 - 1);
    let y0 = (min_y.floor() as i64).max(0);
    let y1 = (max_y.ceil() as i64).min(surface.height() as i64 - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let d = distance_to_segment(center, a, b);

            let coverage = if brush.antialias {
                (r + 0.5 - d).clamp(0.0, 1.0)
            } else if d <= r {
                1.0
            } else {
                0.0
            };

            surface.blend_pixel(x, y, brush.color, coverage);
        }
    }
}

/// Distance from `p` to the closed segment `[a, b]`.
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq <= f32::EPSILON {
        return (p - a).length();
    }

    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}
