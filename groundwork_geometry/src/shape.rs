// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed union of panel shape variants.

use kurbo::{Point, Rect, Vec2};

/// Geometry payload of a panel, in world units (feet).
///
/// For [`Shape::Rect`] and [`Shape::RightTriangle`] the owning panel's anchor
/// is the minimum corner of the unrotated bounding box. For [`Shape::Circle`]
/// the anchor is the center.
///
/// The right triangle's hypotenuse runs from the top-right corner of the
/// bounding box to the bottom-left corner, with the right angle at the
/// top-left. This matches how tapered closure panels are cut in the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// An axis-aligned rectangle before rotation.
    Rect {
        /// Extent along X, must be strictly positive.
        width: f64,
        /// Extent along Y, must be strictly positive.
        height: f64,
    },
    /// A right triangle occupying half of its bounding box.
    RightTriangle {
        /// Bounding-box extent along X, must be strictly positive.
        width: f64,
        /// Bounding-box extent along Y, must be strictly positive.
        height: f64,
    },
    /// A circle centered on the panel anchor.
    Circle {
        /// Radius, must be strictly positive.
        radius: f64,
    },
}

impl Shape {
    /// Returns `true` if all extents are finite and strictly positive.
    #[must_use]
    pub fn has_positive_extent(&self) -> bool {
        match *self {
            Self::Rect { width, height } | Self::RightTriangle { width, height } => {
                width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
            }
            Self::Circle { radius } => radius.is_finite() && radius > 0.0,
        }
    }

    /// Bounding box of the unrotated shape, anchored at `anchor`.
    #[must_use]
    pub fn local_bounds(&self, anchor: Point) -> Rect {
        match *self {
            Self::Rect { width, height } | Self::RightTriangle { width, height } => {
                Rect::new(anchor.x, anchor.y, anchor.x + width, anchor.y + height)
            }
            Self::Circle { radius } => Rect::new(
                anchor.x - radius,
                anchor.y - radius,
                anchor.x + radius,
                anchor.y + radius,
            ),
        }
    }

    /// The triangle's vertices in local (unrotated) space: top-left,
    /// top-right, bottom-left.
    ///
    /// Returns `None` for non-triangle shapes.
    #[must_use]
    pub fn triangle_vertices(&self, anchor: Point) -> Option<[Point; 3]> {
        match *self {
            Self::RightTriangle { width, height } => Some([
                anchor,
                anchor + Vec2::new(width, 0.0),
                anchor + Vec2::new(0.0, height),
            ]),
            _ => None,
        }
    }

    /// Point containment in local (unrotated) space.
    ///
    /// The triangle test uses the three half-plane inequalities of its edges,
    /// not just the bounding box; points in the empty half of the box are
    /// rejected.
    #[must_use]
    pub fn contains_local(&self, anchor: Point, pt: Point) -> bool {
        match *self {
            Self::Rect { .. } => {
                // Inclusive on all edges; kurbo's `Rect::contains` is
                // half-open, which would make the max edges unhittable.
                let b = self.local_bounds(anchor);
                pt.x >= b.x0 && pt.x <= b.x1 && pt.y >= b.y0 && pt.y <= b.y1
            }
            Self::RightTriangle { width, height } => {
                let a = anchor;
                let b = anchor + Vec2::new(width, 0.0);
                let c = anchor + Vec2::new(0.0, height);
                // Edge orientation for the a→b→c winding is positive for
                // interior points in a y-down coordinate system.
                edge(a, b, pt) >= 0.0 && edge(b, c, pt) >= 0.0 && edge(c, a, pt) >= 0.0
            }
            Self::Circle { radius } => anchor.distance(pt) <= radius,
        }
    }
}

/// Signed area of the parallelogram spanned by `b - a` and `pt - a`.
fn edge(a: Point, b: Point, pt: Point) -> f64 {
    (b.x - a.x) * (pt.y - a.y) - (b.y - a.y) * (pt.x - a.x)
}
