// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundwork Snap: position adjustment for dragged panels.
//!
//! Liner panels are installed edge to edge; a one-inch gap between adjacent
//! panels on the drawing is a defect in the field. Snapping therefore has
//! two stages, applied per axis:
//!
//! 1. **Grid snap**: round each coordinate of the proposed anchor to the
//!    nearest multiple of the grid spacing. Idempotent.
//! 2. **Neighbor snap**: if any edge of the moving panel's bounding box
//!    lands within the threshold of another panel's edge, shift that axis so
//!    the edges align exactly. Neighbor snap runs after and overrides grid
//!    snap, because flush abutment is the functional point of snapping.
//!
//! When several neighbor edges qualify on one axis, the nearest wins; exact
//! distance ties break toward the lowest panel id, which keeps drags
//! deterministic and testable.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use groundwork_geometry::{Panel, PanelId, Shape};
//! use groundwork_snap::{SnapConfig, snap};
//!
//! let stationary = Panel::new(
//!     PanelId(1),
//!     Point::new(100.0, 0.0),
//!     Shape::Rect { width: 20.0, height: 100.0 },
//! );
//! let moving = Panel::new(
//!     PanelId(2),
//!     Point::new(200.0, 0.0),
//!     Shape::Rect { width: 20.0, height: 100.0 },
//! );
//!
//! let config = SnapConfig { grid: None, neighbor_threshold: Some(5.0) };
//! // Proposed at x=103: within 5ft of the stationary panel's left edge.
//! let result = snap(&config, &moving, Point::new(103.0, 0.0), &[stationary]);
//! assert_eq!(result.origin.x, 100.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use groundwork_geometry::{Panel, PanelId};
use kurbo::Point;

/// Which snapping stages are active, and their parameters.
///
/// `None` disables a stage. Both stages disabled makes [`snap`] the
/// identity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SnapConfig {
    /// Grid spacing in world units.
    pub grid: Option<f64>,
    /// Neighbor-edge capture distance in world units.
    pub neighbor_threshold: Option<f64>,
}

/// What captured an axis during snapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapKind {
    /// The coordinate was rounded to the grid.
    Grid,
    /// The edge was aligned flush with this panel's edge.
    Neighbor(PanelId),
}

/// Outcome of a snap: the adjusted anchor plus per-axis capture reasons.
///
/// The capture reasons let a renderer draw snap guides under a debug
/// overlay; they carry no further semantics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapResult {
    /// Adjusted world-space anchor for the moving panel.
    pub origin: Point,
    /// What captured the X axis, if anything.
    pub x_kind: Option<SnapKind>,
    /// What captured the Y axis, if anything.
    pub y_kind: Option<SnapKind>,
}

/// Adjusts a proposed anchor position for `moving` against `others`.
///
/// `others` may contain the moving panel itself and invalid panels; both are
/// skipped. A non-finite proposal is returned unchanged (the caller's
/// sanitization owns that case).
#[must_use]
pub fn snap(config: &SnapConfig, moving: &Panel, proposed: Point, others: &[Panel]) -> SnapResult {
    if !proposed.is_finite() {
        return SnapResult {
            origin: proposed,
            x_kind: None,
            y_kind: None,
        };
    }

    let mut origin = proposed;
    let mut x_kind = None;
    let mut y_kind = None;

    if let Some(grid) = config.grid
        && grid > 0.0
        && grid.is_finite()
    {
        let snapped_x = (proposed.x / grid).round() * grid;
        let snapped_y = (proposed.y / grid).round() * grid;
        if snapped_x != origin.x {
            x_kind = Some(SnapKind::Grid);
        }
        if snapped_y != origin.y {
            y_kind = Some(SnapKind::Grid);
        }
        origin = Point::new(snapped_x, snapped_y);
    }

    if let Some(threshold) = config.neighbor_threshold
        && threshold > 0.0
        && threshold.is_finite()
    {
        // Edges of the moving panel's bounding box at the (grid-snapped)
        // candidate position.
        let mut candidate = moving.clone();
        candidate.origin = origin;
        let bb = candidate.bounding_box();

        if let Some((delta, id)) =
            nearest_edge_delta(moving.id, [bb.x0, bb.x1], others, threshold, Axis::X)
        {
            origin.x += delta;
            x_kind = Some(SnapKind::Neighbor(id));
        }
        if let Some((delta, id)) =
            nearest_edge_delta(moving.id, [bb.y0, bb.y1], others, threshold, Axis::Y)
        {
            origin.y += delta;
            y_kind = Some(SnapKind::Neighbor(id));
        }
    }

    SnapResult {
        origin,
        x_kind,
        y_kind,
    }
}

#[derive(Copy, Clone)]
enum Axis {
    X,
    Y,
}

/// Smallest shift that aligns one of `moving_edges` with a neighbor edge on
/// the given axis, within `threshold`. Exact ties break to the lowest id.
fn nearest_edge_delta(
    moving_id: PanelId,
    moving_edges: [f64; 2],
    others: &[Panel],
    threshold: f64,
    axis: Axis,
) -> Option<(f64, PanelId)> {
    let mut best: Option<(f64, PanelId)> = None;
    for other in others {
        if other.id == moving_id || !other.is_valid() {
            continue;
        }
        let bb = other.bounding_box();
        let other_edges = match axis {
            Axis::X => [bb.x0, bb.x1],
            Axis::Y => [bb.y0, bb.y1],
        };
        for moving_edge in moving_edges {
            for other_edge in other_edges {
                let delta = other_edge - moving_edge;
                if delta.abs() > threshold {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((best_delta, best_id)) => {
                        delta.abs() < best_delta.abs()
                            || (delta.abs() == best_delta.abs() && other.id < best_id)
                    }
                };
                if better {
                    best = Some((delta, other.id));
                }
            }
        }
    }
    best
}
