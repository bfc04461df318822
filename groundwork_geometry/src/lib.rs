// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundwork Geometry: panel shapes for site-layout canvases.
//!
//! This crate models the entities that appear on a panel-layout drawing:
//! rectangular and right-triangular liner panels, circular repair patches,
//! and rectangular test markers. All coordinates are world-space feet;
//! converting to device pixels is the job of `groundwork_view2d`.
//!
//! It provides:
//! - A closed shape union ([`Shape`]) with per-variant geometry payloads.
//! - The [`Panel`] entity: anchor, shape, rotation, and QC labels.
//! - Validity checks that gate rendering and hit testing ([`Panel::is_valid`]).
//! - Rotation-aware bounding boxes and point containment.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use groundwork_geometry::{Panel, PanelId, Shape};
//!
//! let panel = Panel::new(
//!     PanelId(1),
//!     Point::new(100.0, 50.0),
//!     Shape::Rect { width: 20.0, height: 100.0 },
//! );
//!
//! assert!(panel.is_valid());
//! assert!(panel.contains_point(Point::new(110.0, 60.0)));
//! assert!(!panel.contains_point(Point::new(130.0, 60.0)));
//! ```
//!
//! ## Design notes
//!
//! - Shape dispatch is an exhaustive `match` everywhere; adding a variant is
//!   a compiler-checked change.
//! - Rotation is stored in degrees (the unit the authoring UI exposes) and
//!   applied about [`Panel::rotation_pivot`].
//! - Bounding boxes are conservative under rotation: they bound the rotated
//!   outline, never the unrotated one.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod panel;
mod shape;

pub use panel::{Panel, PanelId};
pub use shape::Shape;

/// Returns `true` if two rectangles overlap or touch.
///
/// Unlike [`kurbo::Rect::overlaps`]-style area tests, edges count: a panel
/// flush against the culling rect's margin is still kept, which avoids
/// pop-in for entities abutting the visible region.
#[must_use]
pub fn rects_touch(a: kurbo::Rect, b: kurbo::Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}
