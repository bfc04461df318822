// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundwork Spatial: hit testing and culling over a panel list.
//!
//! Panel lists on a layout drawing are flat and ordered: later panels draw
//! on top, so they hit-test first. This crate provides the two spatial
//! queries the engine needs each frame:
//!
//! - [`hit_test`]: the topmost valid panel containing a world point.
//! - [`cull`]: the render-ordered subset of panels whose bounding boxes
//!   intersect the visible world rectangle plus a margin.
//!
//! Plus the resize affordance lookup, [`handle_at`], which finds the corner
//! handle of a selected panel under the pointer.
//!
//! Queries are linear scans. Layouts top out at a few thousand panels and
//! both queries run on single pointer events or once per frame, so a flat
//! scan beats maintaining a spatial index; swapping one in later would only
//! change this crate.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use groundwork_geometry::{Panel, PanelId, Shape};
//! use groundwork_spatial::hit_test;
//!
//! let panels = vec![
//!     Panel::new(PanelId(1), Point::ZERO, Shape::Rect { width: 20.0, height: 20.0 }),
//!     Panel::new(PanelId(2), Point::new(10.0, 10.0), Shape::Rect { width: 20.0, height: 20.0 }),
//! ];
//!
//! // Both panels cover (15, 15); the later one is on top.
//! assert_eq!(hit_test(&panels, Point::new(15.0, 15.0)), Some(PanelId(2)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use groundwork_geometry::{Panel, PanelId, rects_touch};
use kurbo::{Point, Rect};

/// Corner handles of a selected panel's bounding box, used for resizing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Handle {
    /// Top-left corner.
    NorthWest,
    /// Top-right corner.
    NorthEast,
    /// Bottom-left corner.
    SouthWest,
    /// Bottom-right corner.
    SouthEast,
}

impl Handle {
    /// All handles in a fixed order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// The handle's corner on a rectangle.
    #[must_use]
    pub fn corner(self, rect: Rect) -> Point {
        match self {
            Self::NorthWest => Point::new(rect.x0, rect.y0),
            Self::NorthEast => Point::new(rect.x1, rect.y0),
            Self::SouthWest => Point::new(rect.x0, rect.y1),
            Self::SouthEast => Point::new(rect.x1, rect.y1),
        }
    }

    /// The diagonally opposite handle; its corner stays fixed while
    /// this one is dragged.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthEast,
            Self::SouthEast => Self::NorthWest,
        }
    }
}

/// Returns the topmost valid panel containing the world point.
///
/// Panels are tested in reverse render order so the panel drawn last wins.
/// Invalid panels (non-positive extents, non-finite coordinates) are never
/// hittable.
#[must_use]
pub fn hit_test(panels: &[Panel], world_pt: Point) -> Option<PanelId> {
    panels
        .iter()
        .rev()
        .find(|p| p.contains_point(world_pt))
        .map(|p| p.id)
}

/// Returns the render-ordered indices of panels visible in the given rect.
///
/// `visible` is the world rectangle derived from the viewport; `margin`
/// (world units, non-negative) inflates it so entities just off-screen are
/// still produced, avoiding pop-in during fast pans. A panel is kept when
/// its conservative bounding box touches the inflated rect, so nothing that
/// visually overlaps the canvas is ever excluded.
#[must_use]
pub fn cull(panels: &[Panel], visible: Rect, margin: f64) -> Vec<usize> {
    let expanded = visible.inflate(margin.max(0.0), margin.max(0.0));
    panels
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_valid() && rects_touch(p.bounding_box(), expanded))
        .map(|(i, _)| i)
        .collect()
}

/// Finds the resize handle of `panel` within `tolerance` world units of a
/// world point.
///
/// Handles sit on the corners of the panel's world bounding box. The
/// tolerance is usually a fixed pixel radius divided by the viewport scale
/// so that handles are equally grabbable at every zoom level. Returns the
/// nearest qualifying handle.
#[must_use]
pub fn handle_at(panel: &Panel, world_pt: Point, tolerance: f64) -> Option<Handle> {
    if !panel.is_valid() {
        return None;
    }
    let bb = panel.bounding_box();
    let mut best: Option<(Handle, f64)> = None;
    for handle in Handle::ALL {
        let d = handle.corner(bb).distance(world_pt);
        if d <= tolerance && best.is_none_or(|(_, bd)| d < bd) {
            best = Some((handle, d));
        }
    }
    best.map(|(h, _)| h)
}
