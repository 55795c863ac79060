use anyhow::Result;

use crate::coords::{Rect, Vec2};
use crate::input::{TouchPhase, TouchSample};
use crate::path::StrokePath;
use crate::raster::{PixelSurface, stroke_quad};

use super::CanvasConfig;

/// Gesture state for the single supported pointer.
///
/// `anchor` is the last committed smoothing anchor — the raw sample position
/// of the stroke start or of the most recent accepted move.
#[derive(Debug, Copy, Clone, PartialEq)]
enum StrokeState {
    Idle,
    Drawing { anchor: Vec2 },
}

/// Read-only view returned to the host's display step.
#[derive(Debug)]
pub struct CompositeFrame<'a> {
    /// The cached stroke raster. Borrowed from the renderer, so it cannot
    /// outlive a resize.
    pub surface: &'a PixelSurface,
    /// Decorative border rectangle derived from the surface size.
    pub frame: Rect,
}

/// Converts raw pointer samples into a persistently cached raster.
///
/// Accepted move events append one quadratic segment to the live path and
/// immediately commit that segment into the surface; the raster therefore
/// always holds a prefix of the current stroke, and there is no way to
/// retract a committed segment. Samples moving less than the touch slop on
/// both axes are dropped as jitter.
///
/// All operations are synchronous and must be serialized by the host; the
/// renderer performs no background work.
pub struct StrokeRenderer {
    config: CanvasConfig,
    surface: PixelSurface,
    frame: Rect,
    path: StrokePath,
    state: StrokeState,
    redraw_requested: bool,
}

impl StrokeRenderer {
    /// Creates a renderer with an initial surface of `width`×`height`.
    ///
    /// Fails on zero dimensions or allocation failure; a renderer never
    /// exists without a valid surface.
    pub fn new(config: CanvasConfig, width: u32, height: u32) -> Result<Self> {
        let surface = PixelSurface::allocate(width, height, config.background)?;
        let frame = Rect::from_surface_size(width, height).inset(config.frame_inset);

        Ok(Self {
            config,
            surface,
            frame,
            path: StrokePath::new(),
            state: StrokeState::Idle,
            redraw_requested: false,
        })
    }

    #[inline]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Replaces the surface for a new viewport size and clears it to the
    /// background color. All previously drawn content is discarded.
    ///
    /// Zero dimensions are rejected without touching any state. On
    /// allocation failure the previous surface stays installed and the error
    /// is returned; the old surface is only released once the replacement
    /// exists.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            log::warn!("ignoring resize to {width}x{height}");
            return Ok(());
        }

        self.surface = PixelSurface::allocate(width, height, self.config.background)?;
        self.frame = Rect::from_surface_size(width, height).inset(self.config.frame_inset);
        self.request_redraw();

        log::debug!("surface resized to {width}x{height}");
        Ok(())
    }

    /// Dispatches one decoded pointer sample.
    pub fn on_touch(&mut self, sample: TouchSample) {
        match sample.phase {
            TouchPhase::Start => self.on_touch_start(sample.x, sample.y),
            TouchPhase::Move => self.on_touch_move(sample.x, sample.y),
            TouchPhase::End => self.on_touch_end(),
        }
    }

    /// Begins a new stroke at `(x, y)`.
    ///
    /// Discards any prior uncommitted path, sets the smoothing anchor, and
    /// enters the drawing state. The raster is not touched.
    pub fn on_touch_start(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        self.path.reset();
        self.path.move_to(p);
        self.state = StrokeState::Drawing { anchor: p };
        self.request_redraw();
    }

    /// Feeds one move sample.
    ///
    /// No-op while idle. While drawing, the sample is accepted when it moves
    /// at least the touch slop away from the anchor on either axis
    /// (independent per-axis thresholds, not Euclidean distance). An
    /// accepted sample appends a quadratic segment — control point at the
    /// anchor, endpoint at the anchor/sample midpoint — commits exactly that
    /// segment into the raster, and advances the anchor to the raw sample.
    /// Rejected samples are dropped entirely.
    ///
    /// A redraw is requested on every call while drawing, accepted or not.
    pub fn on_touch_move(&mut self, x: f32, y: f32) {
        let StrokeState::Drawing { anchor } = self.state else {
            return;
        };

        let dx = (x - anchor.x).abs();
        let dy = (y - anchor.y).abs();
        if dx >= self.config.touch_slop || dy >= self.config.touch_slop {
            let sample = Vec2::new(x, y);
            let mid = anchor.midpoint(sample);
            let from = self.path.current();

            self.path.quad_to(anchor, mid);
            stroke_quad(&mut self.surface, from, anchor, mid, &self.config.brush());

            self.state = StrokeState::Drawing { anchor: sample };
        }

        self.request_redraw();
    }

    /// Ends the current stroke.
    ///
    /// No-op while idle. Otherwise clears the live path — every accepted
    /// move already committed its segment, so nothing is lost — and returns
    /// to the idle state.
    pub fn on_touch_end(&mut self) {
        if self.state == StrokeState::Idle {
            return;
        }

        self.path.reset();
        self.state = StrokeState::Idle;
        self.request_redraw();
    }

    /// Read-only raster + frame rect for the host's display step.
    #[inline]
    pub fn composite_frame(&self) -> CompositeFrame<'_> {
        CompositeFrame {
            surface: &self.surface,
            frame: self.frame,
        }
    }

    /// Vector form of the in-progress stroke, for hosts that composite it
    /// live. Empty outside of a stroke.
    #[inline]
    pub fn live_path(&self) -> &StrokePath {
        &self.path
    }

    /// Returns whether a redraw was requested since the last call, clearing
    /// the flag. The host polls this to schedule its next display refresh.
    #[inline]
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    #[inline]
    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::path::PathCmd;
    use crate::raster::Rgba8;

    const INK: Rgba8 = Rgba8::new(0, 0, 0, 255);
    const BG: Rgba8 = Rgba8::new(255, 255, 255, 255);

    /// White background, black ink, slop 8 — every assertion below is exact.
    fn config() -> CanvasConfig {
        CanvasConfig {
            stroke_width: 12.0,
            stroke: Color::new(0.0, 0.0, 0.0, 1.0),
            background: Color::new(1.0, 1.0, 1.0, 1.0),
            frame_inset: 40.0,
            touch_slop: 8.0,
            antialias: true,
        }
    }

    fn renderer(w: u32, h: u32) -> StrokeRenderer {
        StrokeRenderer::new(config(), w, h).unwrap()
    }

    fn is_uniform_background(r: &StrokeRenderer) -> bool {
        r.composite_frame().surface.pixels().iter().all(|p| *p == BG)
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_discards_drawn_content() {
        let mut r = renderer(64, 64);
        r.on_touch_start(10.0, 10.0);
        r.on_touch_move(30.0, 10.0);
        assert!(!is_uniform_background(&r));

        r.on_resize(32, 48).unwrap();

        let frame = r.composite_frame();
        assert_eq!(frame.surface.width(), 32);
        assert_eq!(frame.surface.height(), 48);
        assert!(is_uniform_background(&r));
    }

    #[test]
    fn resize_to_zero_is_rejected_without_corruption() {
        let mut r = renderer(64, 64);
        r.on_touch_start(10.0, 10.0);
        r.on_touch_move(30.0, 10.0);
        let before = r.composite_frame().surface.as_bytes().to_vec();

        r.on_resize(0, 48).unwrap();
        r.on_resize(48, 0).unwrap();

        let frame = r.composite_frame();
        assert_eq!(frame.surface.width(), 64);
        assert_eq!(frame.surface.height(), 64);
        assert_eq!(frame.surface.as_bytes(), &before[..]);
    }

    #[test]
    fn zero_initial_size_is_an_error() {
        assert!(StrokeRenderer::new(config(), 0, 10).is_err());
    }

    // ── frame rectangle ───────────────────────────────────────────────────

    #[test]
    fn frame_rect_is_surface_bounds_inset_by_margin() {
        let r = renderer(200, 100);
        assert_eq!(r.composite_frame().frame, Rect::new(40.0, 40.0, 120.0, 20.0));
    }

    #[test]
    fn frame_rect_with_small_positive_interior() {
        let mut r = renderer(200, 100);
        r.on_resize(90, 82).unwrap();

        let frame = r.composite_frame().frame;
        assert_eq!(frame, Rect::new(40.0, 40.0, 10.0, 2.0));
        assert!(!frame.is_empty());
    }

    // ── jitter rejection ──────────────────────────────────────────────────

    #[test]
    fn sub_slop_moves_are_dropped() {
        let mut r = renderer(64, 64);
        r.on_touch_start(10.0, 10.0);

        // 2px on both axes: below the slop of 8.
        r.on_touch_move(12.0, 12.0);

        assert!(is_uniform_background(&r));
        assert_eq!(r.live_path().cmds().len(), 1);
    }

    #[test]
    fn at_slop_move_commits_one_segment_and_advances_anchor() {
        let mut r = renderer(64, 64);
        r.on_touch_start(10.0, 10.0);
        r.on_touch_move(30.0, 10.0);

        assert_eq!(r.live_path().cmds().len(), 2);
        assert!(!is_uniform_background(&r));

        // If the anchor had stayed at the old midpoint (20, 10) this would
        // be an accepted move; from the raw sample (30, 10) it is jitter.
        r.on_touch_move(33.0, 13.0);
        assert_eq!(r.live_path().cmds().len(), 2);
    }

    #[test]
    fn move_exactly_at_slop_is_accepted() {
        let mut r = renderer(64, 64);
        r.on_touch_start(10.0, 10.0);

        // dx == slop: the comparison is >=, not >.
        r.on_touch_move(18.0, 10.0);
        assert_eq!(r.live_path().cmds().len(), 2);
    }

    #[test]
    fn per_axis_threshold_rejects_diagonal_a_euclidean_policy_would_accept() {
        // dx = dy = 6: the Euclidean distance (~8.49) exceeds the slop of 8,
        // but neither axis alone reaches it. The per-axis rule drops this.
        let mut r = renderer(64, 64);
        r.on_touch_start(10.0, 10.0);
        r.on_touch_move(16.0, 16.0);

        assert_eq!(r.live_path().cmds().len(), 1);
        assert!(is_uniform_background(&r));
    }

    // ── idle calls ────────────────────────────────────────────────────────

    #[test]
    fn move_and_end_while_idle_are_no_ops() {
        let mut r = renderer(64, 64);
        assert!(!r.take_redraw_request());

        r.on_touch_move(50.0, 50.0);
        r.on_touch_end();

        assert!(is_uniform_background(&r));
        assert!(r.live_path().is_empty());
        assert!(!r.take_redraw_request());
    }

    // ── segment endpoint law ──────────────────────────────────────────────

    #[test]
    fn committed_segment_pins_control_to_anchor_and_ends_at_midpoint() {
        let mut r = renderer(64, 64);
        r.on_touch_start(0.0, 0.0);
        r.on_touch_move(16.0, 12.0);

        assert_eq!(
            r.live_path().cmds(),
            &[
                PathCmd::MoveTo(Vec2::new(0.0, 0.0)),
                PathCmd::QuadTo {
                    ctrl: Vec2::new(0.0, 0.0),
                    to: Vec2::new(8.0, 6.0),
                },
            ]
        );
    }

    #[test]
    fn second_segment_starts_where_the_first_ended() {
        let mut r = renderer(128, 64);
        r.on_touch_start(10.0, 10.0);
        r.on_touch_move(30.0, 10.0);
        r.on_touch_move(50.0, 10.0);

        // Second segment: control at the advanced anchor (30, 10), endpoint
        // at midpoint(anchor, sample) = (40, 10).
        assert_eq!(
            r.live_path().cmds()[2],
            PathCmd::QuadTo {
                ctrl: Vec2::new(30.0, 10.0),
                to: Vec2::new(40.0, 10.0),
            }
        );
    }

    // ── redraw signal ─────────────────────────────────────────────────────

    #[test]
    fn rejected_move_still_requests_redraw() {
        let mut r = renderer(64, 64);
        r.on_touch_start(10.0, 10.0);
        assert!(r.take_redraw_request());

        r.on_touch_move(11.0, 11.0);
        assert!(r.take_redraw_request());
        assert!(!r.take_redraw_request());
    }

    // ── end-to-end ────────────────────────────────────────────────────────

    #[test]
    fn stroke_commits_then_end_and_composite_leave_raster_untouched() {
        let mut r = renderer(100, 100);

        r.on_touch(TouchSample::new(10.0, 10.0, TouchPhase::Start));
        r.on_touch(TouchSample::new(26.0, 10.0, TouchPhase::Move));

        // Committed capsule runs from (10, 10) to the midpoint (18, 10).
        let frame = r.composite_frame();
        assert_eq!(frame.surface.pixel(14, 10), Some(INK));
        assert_eq!(frame.surface.pixel(14, 40), Some(BG));

        let snapshot = frame.surface.as_bytes().to_vec();

        r.on_touch(TouchSample::new(0.0, 0.0, TouchPhase::End));

        let frame = r.composite_frame();
        assert!(r.live_path().is_empty());
        assert_eq!(frame.surface.as_bytes(), &snapshot[..]);
    }
}
