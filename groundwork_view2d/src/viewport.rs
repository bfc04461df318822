// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// Default lower scale bound: 1 foot maps to 0.01 px (whole-site overview).
pub const DEFAULT_MIN_SCALE: f64 = 0.01;

/// Default upper scale bound: 1 foot maps to 100 px (seam-level detail).
pub const DEFAULT_MAX_SCALE: f64 = 100.0;

/// 2D viewport over the world-space site plan.
///
/// `Viewport` tracks the canvas pixel size, a uniform scale in pixels per
/// foot, and the world point displayed at the canvas center. It can be used
/// to:
/// - Convert points and rectangles between world and view coordinates.
/// - Pan in view space and zoom about an anchor point.
/// - Derive the visible world rectangle for culling.
///
/// Every mutation clamps the scale into its configured range and replaces
/// non-finite state with the nearest valid value, so the viewport is always
/// renderable.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_width: f64,
    view_height: f64,
    center: Point,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport {
    /// Creates a viewport over a canvas of the given pixel size.
    ///
    /// - Initial scale is `1.0` px per foot.
    /// - Scale is clamped to [`DEFAULT_MIN_SCALE`]..[`DEFAULT_MAX_SCALE`].
    /// - Initial center is the world origin.
    #[must_use]
    pub fn new(view_width: f64, view_height: f64) -> Self {
        let mut vp = Self {
            view_width,
            view_height,
            center: Point::ZERO,
            scale: 1.0,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Current canvas width in pixels.
    #[must_use]
    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    /// Current canvas height in pixels.
    #[must_use]
    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    /// Resize notification from the host; keeps center and scale.
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        self.view_width = width;
        self.view_height = height;
        self.rebuild_transforms();
    }

    /// World point currently shown at the canvas center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Moves the viewport center to a world point.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
        self.rebuild_transforms();
    }

    /// Current scale in pixels per foot.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamping it into the configured range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.rebuild_transforms();
    }

    /// Sets the scale bounds and re-clamps the current scale.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.rebuild_transforms();
    }

    /// Pans by a delta in view/device pixels.
    ///
    /// Dragging the canvas moves the world with the cursor, so the center
    /// moves *against* the delta.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.center -= delta / self.scale;
        self.rebuild_transforms();
    }

    /// Zooms by a multiplicative factor about an anchor in view coordinates.
    ///
    /// The world point under the anchor stays under the anchor: the new
    /// center is solved from the anchored world point and the clamped new
    /// scale, rather than accumulated from pan adjustments.
    pub fn zoom_about_view_point(&mut self, anchor: Point, factor: f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            return;
        }
        let new_scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        if new_scale == self.scale {
            return;
        }
        let anchored_world = self.view_to_world_point(anchor);
        self.scale = new_scale;
        self.center = Point::new(
            anchored_world.x - (anchor.x - self.view_width / 2.0) / new_scale,
            anchored_world.y - (anchor.y - self.view_height / 2.0) / new_scale,
        );
        self.rebuild_transforms();
    }

    /// Fits a world rectangle into the view and centers on it.
    ///
    /// Aspect ratio is preserved; the resulting scale is clamped into the
    /// configured range. Degenerate rectangles are ignored.
    pub fn fit_rect(&mut self, rect: Rect) {
        if !(rect.width() > 0.0 && rect.height() > 0.0) {
            return;
        }
        if !(self.view_width > 0.0 && self.view_height > 0.0) {
            return;
        }
        let sx = self.view_width / rect.width();
        let sy = self.view_height / rect.height();
        self.scale = sx.min(sy);
        self.center = rect.center();
        self.rebuild_transforms();
    }

    /// Returns the world rectangle currently visible through the canvas.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world_rect(Rect::new(0.0, 0.0, self.view_width, self.view_height))
    }

    /// Converts a world-space point into view/device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view/device-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a world-space rectangle into view/device coordinates.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        map_rect(self.world_to_view, rect)
    }

    /// Converts a view/device-space rectangle into world coordinates.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        map_rect(self.view_to_world, rect)
    }

    /// The world-to-view affine, for handing to a rendering backend.
    #[must_use]
    pub fn world_to_view_transform(&self) -> Affine {
        self.world_to_view
    }

    /// Current world-units-per-pixel ratio (`1.0 / scale`).
    ///
    /// Useful for expressing screen-constant sizes (labels, selection
    /// handles, stroke widths) in world units.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_width: self.view_width,
            view_height: self.view_height,
            center: self.center,
            visible_world_rect: self.visible_world_rect(),
            scale: self.scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn rebuild_transforms(&mut self) {
        self.sanitize();
        // World → view: recenter on `center`, scale, then translate to the
        // canvas midpoint.
        self.world_to_view =
            Affine::translate(Vec2::new(self.view_width / 2.0, self.view_height / 2.0))
                * Affine::scale(self.scale)
                * Affine::translate(-self.center.to_vec2());
        self.view_to_world = self.world_to_view.inverse();
    }

    /// Clamp-don't-reject: every update leaves the viewport renderable.
    fn sanitize(&mut self) {
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            self.min_scale = DEFAULT_MIN_SCALE;
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            self.max_scale = self.min_scale.max(DEFAULT_MAX_SCALE);
        }
        self.scale = if self.scale.is_finite() {
            self.scale.clamp(self.min_scale, self.max_scale)
        } else {
            1.0_f64.clamp(self.min_scale, self.max_scale)
        };
        if !self.center.x.is_finite() {
            self.center.x = 0.0;
        }
        if !self.center.y.is_finite() {
            self.center.y = 0.0;
        }
        if !self.view_width.is_finite() || self.view_width < 1.0 {
            self.view_width = 1.0;
        }
        if !self.view_height.is_finite() || self.view_height < 1.0 {
            self.view_height = 1.0;
        }
    }
}

/// Transform the four corners and take their bounding box. Sufficient for
/// the axis-aligned, uniform scale transforms used here.
fn map_rect(xf: Affine, rect: Rect) -> Rect {
    let q0 = xf * rect.origin();
    let q1 = xf * Point::new(rect.x1, rect.y0);
    let q2 = xf * Point::new(rect.x0, rect.y1);
    let q3 = xf * Point::new(rect.x1, rect.y1);
    Rect::new(
        q0.x.min(q1.x).min(q2.x).min(q3.x),
        q0.y.min(q1.y).min(q2.y).min(q3.y),
        q0.x.max(q1.x).max(q2.x).max(q3.x),
        q0.y.max(q1.y).max(q2.y).max(q3.y),
    )
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Canvas width in pixels.
    pub view_width: f64,
    /// Canvas height in pixels.
    pub view_height: f64,
    /// World point at the canvas center.
    pub center: Point,
    /// World rectangle currently visible.
    pub visible_world_rect: Rect,
    /// Current scale in pixels per foot.
    pub scale: f64,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::Viewport;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn world_view_roundtrip() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_center(Point::new(512.5, -47.25));
        vp.set_scale(3.2);

        for &pt in &[
            Point::ZERO,
            Point::new(1.0, 1.0),
            Point::new(-1234.5, 987.25),
            Point::new(1e6, -1e6),
        ] {
            let back = vp.view_to_world_point(vp.world_to_view_point(pt));
            assert_close(back, pt);
        }
    }

    #[test]
    fn center_convention_maps_center_to_canvas_midpoint() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_center(Point::new(500.0, 500.0));

        assert_close(
            vp.world_to_view_point(Point::new(500.0, 500.0)),
            Point::new(400.0, 300.0),
        );
        // One foot right of center at scale 1 is one pixel right.
        assert_close(
            vp.world_to_view_point(Point::new(501.0, 500.0)),
            Point::new(401.0, 300.0),
        );
    }

    #[test]
    fn zoom_keeps_anchored_world_point_fixed() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_center(Point::new(250.0, 250.0));

        let anchor = Point::new(123.0, 456.0);
        let before = vp.view_to_world_point(anchor);
        vp.zoom_about_view_point(anchor, 1.25);
        let after = vp.view_to_world_point(anchor);
        assert_close(before, after);

        vp.zoom_about_view_point(anchor, 0.8);
        let again = vp.view_to_world_point(anchor);
        assert_close(before, again);
    }

    #[test]
    fn repeated_zoom_clamps_at_scale_limits() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_scale_limits(0.1, 10.0);

        let anchor = Point::new(400.0, 300.0);
        for _ in 0..100 {
            vp.zoom_about_view_point(anchor, 1.25);
        }
        assert_eq!(vp.scale(), 10.0);

        for _ in 0..100 {
            vp.zoom_about_view_point(anchor, 0.8);
        }
        assert_eq!(vp.scale(), 0.1);
    }

    #[test]
    fn pan_moves_center_against_cursor() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_scale(2.0);
        vp.set_center(Point::new(100.0, 100.0));

        // Dragging the pointer 20px right / 10px down brings world content
        // to the right, i.e. the center moves left/up by delta/scale.
        vp.pan_by_view(Vec2::new(20.0, 10.0));
        assert_close(vp.center(), Point::new(90.0, 95.0));
    }

    #[test]
    fn visible_world_rect_tracks_scale_and_center() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_center(Point::new(500.0, 500.0));
        vp.set_scale(2.0);

        let rect = vp.visible_world_rect();
        assert!((rect.width() - 400.0).abs() < 1e-9);
        assert!((rect.height() - 300.0).abs() < 1e-9);
        assert!((rect.center().x - 500.0).abs() < 1e-9);
        assert!((rect.center().y - 500.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_state_is_sanitized() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_scale(f64::NAN);
        assert!(vp.scale().is_finite());

        vp.set_center(Point::new(f64::INFINITY, 10.0));
        assert_eq!(vp.center(), Point::new(0.0, 10.0));

        // Still renderable and invertible after garbage input.
        let pt = vp.view_to_world_point(vp.world_to_view_point(Point::new(3.0, 4.0)));
        assert_close(pt, Point::new(3.0, 4.0));
    }

    #[test]
    fn fit_rect_centers_and_scales() {
        let mut vp = Viewport::new(200.0, 100.0);
        vp.fit_rect(Rect::new(0.0, 0.0, 1000.0, 1000.0));

        // Height is the binding axis: 100px / 1000ft.
        assert!((vp.scale() - 0.1).abs() < 1e-12);
        assert_close(vp.center(), Point::new(500.0, 500.0));
    }

    #[test]
    fn resize_keeps_center_and_scale() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_center(Point::new(42.0, 24.0));
        vp.set_scale(4.0);

        vp.set_view_size(1024.0, 768.0);
        assert_eq!(vp.center(), Point::new(42.0, 24.0));
        assert_eq!(vp.scale(), 4.0);
        assert_close(
            vp.world_to_view_point(Point::new(42.0, 24.0)),
            Point::new(512.0, 384.0),
        );
    }
}
