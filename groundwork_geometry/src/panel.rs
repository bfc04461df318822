// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The panel entity: anchor, shape, rotation, and QC labels.

use alloc::string::String;

use kurbo::{Affine, Point, Rect};

use crate::Shape;

/// Stable identifier of a panel within one layout.
///
/// Ids are assigned by the owning store and never reused within a layout.
/// Ordering is used for deterministic tie-breaks (for example in snapping).
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(pub u64);

/// A single entity on the layout drawing.
///
/// Positions and extents are world-space feet. `rotation` is in degrees,
/// applied about [`Panel::rotation_pivot`]. Render order is the order of the
/// owning list: later panels draw on top and hit-test first.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// Stable unique identifier.
    pub id: PanelId,
    /// World-space anchor. Minimum corner of the bounding box for rectangles
    /// and triangles, center for circles.
    pub origin: Point,
    /// Shape variant and extents.
    pub shape: Shape,
    /// Rotation in degrees about the shape centroid.
    pub rotation: f64,
    /// Panel number shown as a label when legible (for example "P-101").
    pub panel_number: Option<String>,
    /// Roll number of the material the panel was cut from.
    pub roll_number: Option<String>,
}

impl Panel {
    /// Creates an unrotated, unlabeled panel.
    #[must_use]
    pub fn new(id: PanelId, origin: Point, shape: Shape) -> Self {
        Self {
            id,
            origin,
            shape,
            rotation: 0.0,
            panel_number: None,
            roll_number: None,
        }
    }

    /// Returns `true` if the panel participates in rendering and hit testing.
    ///
    /// A panel with non-positive or non-finite extents, a non-finite anchor,
    /// or a non-finite rotation is inert: skipped by culling, hit testing,
    /// snapping, and drawing. Other panels are unaffected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.origin.is_finite() && self.rotation.is_finite() && self.shape.has_positive_extent()
    }

    /// The point the rotation is applied about.
    ///
    /// Rectangles and circles rotate about their bounding-box center (which
    /// is the centroid for both). Triangles rotate about the vertex centroid,
    /// which sits at one third of each extent from the right angle.
    #[must_use]
    pub fn rotation_pivot(&self) -> Point {
        match self.shape.triangle_vertices(self.origin) {
            Some([a, b, c]) => Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0),
            None => self.shape.local_bounds(self.origin).center(),
        }
    }

    /// Rotation as a kurbo transform about the pivot, or identity.
    #[must_use]
    pub fn rotation_transform(&self) -> Affine {
        if self.rotation == 0.0 {
            Affine::IDENTITY
        } else {
            Affine::rotate_about(self.rotation.to_radians(), self.rotation_pivot())
        }
    }

    /// World-space axis-aligned bounding box, conservative under rotation.
    ///
    /// For rotated rectangles the box bounds the four rotated corners; for
    /// rotated triangles it bounds the three rotated vertices. Circles are
    /// rotation-invariant.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let local = self.shape.local_bounds(self.origin);
        if self.rotation == 0.0 || matches!(self.shape, Shape::Circle { .. }) {
            return local;
        }
        let xf = self.rotation_transform();
        match self.shape.triangle_vertices(self.origin) {
            Some(vertices) => bounds_of(&vertices.map(|v| xf * v)),
            None => {
                let corners = [
                    local.origin(),
                    Point::new(local.x1, local.y0),
                    Point::new(local.x1, local.y1),
                    Point::new(local.x0, local.y1),
                ];
                bounds_of(&corners.map(|c| xf * c))
            }
        }
    }

    /// Rotation-aware point containment.
    ///
    /// The query point is inverse-rotated about the pivot, then tested
    /// against the unrotated shape. Invalid panels contain nothing.
    #[must_use]
    pub fn contains_point(&self, pt: Point) -> bool {
        if !self.is_valid() {
            return false;
        }
        let local_pt = if self.rotation == 0.0 {
            pt
        } else {
            Affine::rotate_about(-self.rotation.to_radians(), self.rotation_pivot()) * pt
        };
        self.shape.contains_local(self.origin, local_pt)
    }
}

fn bounds_of(points: &[Point]) -> Rect {
    let mut out = Rect::new(points[0].x, points[0].y, points[0].x, points[0].y);
    for p in &points[1..] {
        out.x0 = out.x0.min(p.x);
        out.y0 = out.y0.min(p.y);
        out.x1 = out.x1.max(p.x);
        out.y1 = out.y1.max(p.y);
    }
    out
}
