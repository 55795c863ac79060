//! The live in-progress stroke path.
//!
//! A [`StrokePath`] records the vector form of the stroke currently being
//! drawn: one `MoveTo` followed by a `QuadTo` per accepted move event. It is
//! reset at stroke start and stroke end and is never persisted — once a
//! segment is committed into the raster its vector form is gone for good.

use crate::coords::Vec2;

/// One recorded path command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    /// Quadratic Bezier from the current position toward `ctrl`, ending at `to`.
    QuadTo { ctrl: Vec2, to: Vec2 },
}

/// Ordered command sequence for the currently active stroke.
///
/// Mirrors platform path semantics: the write head (`current`) starts at the
/// origin and follows the endpoint of every appended command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokePath {
    cmds: Vec<PathCmd>,
    current: Vec2,
}

impl StrokePath {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all commands and returns the write head to the origin.
    /// Keeps allocated capacity for the next stroke.
    #[inline]
    pub fn reset(&mut self) {
        self.cmds.clear();
        self.current = Vec2::zero();
    }

    #[inline]
    pub fn move_to(&mut self, p: Vec2) {
        self.cmds.push(PathCmd::MoveTo(p));
        self.current = p;
    }

    #[inline]
    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) {
        self.cmds.push(PathCmd::QuadTo { ctrl, to });
        self.current = to;
    }

    /// Current write head: the endpoint of the last command, or the origin
    /// for an empty path.
    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

/// Flatness target for quadratic subdivision, in logical pixels.
const FLATTEN_TOLERANCE: f32 = 0.25;

/// Upper bound on subdivisions per segment. Finger strokes commit short
/// segments, so this is never reached in practice.
const MAX_FLATTEN_STEPS: usize = 32;

/// Flattens one quadratic Bezier into a polyline appended to `out`.
///
/// `out` receives `p0`, any interior points, and finally `to` — the
/// endpoints are pushed exactly, never re-derived from the curve equation,
/// so raster commits land precisely on the committed anchor points.
pub fn flatten_quad(p0: Vec2, ctrl: Vec2, to: Vec2, out: &mut Vec<Vec2>) {
    // Max deviation of the curve from its chord is |p0 - 2*ctrl + to| / 4;
    // subdividing into n spans shrinks it by n^2.
    let dev = (p0 - ctrl * 2.0 + to).length() * 0.25;
    let steps = if dev <= FLATTEN_TOLERANCE {
        1
    } else {
        ((dev / FLATTEN_TOLERANCE).sqrt().ceil() as usize).clamp(1, MAX_FLATTEN_STEPS)
    };

    out.push(p0);
    for i in 1..steps {
        let t = i as f32 / steps as f32;
        let u = 1.0 - t;
        let p = p0 * (u * u) + ctrl * (2.0 * u * t) + to * (t * t);
        out.push(p);
    }
    out.push(to);
}
