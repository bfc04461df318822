// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display-list types a backend replays.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Circle, Point, Rect};
use peniko::Color;

/// A filled or stroked outline in world coordinates.
///
/// Rotation is baked into the points before the outline reaches the scene,
/// so backends never rotate; they only apply the scene's uniform
/// world-to-view transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Outline {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Arbitrary quadrilateral (a rotated rectangle).
    Quad([Point; 4]),
    /// Triangle.
    Tri([Point; 3]),
    /// Circle.
    Circle(Circle),
}

/// One draw operation. Coordinates are world-space; widths and text sizes
/// annotated `_px` or `_world` say which unit the backend should honor.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// A straight line, stroked at a screen-constant width.
    Line {
        /// Start point.
        p0: Point,
        /// End point.
        p1: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width in device pixels.
        width_px: f64,
    },
    /// A filled outline.
    Fill {
        /// The outline to fill.
        outline: Outline,
        /// Fill color.
        color: Color,
    },
    /// A stroked outline at a screen-constant width.
    Stroke {
        /// The outline to stroke.
        outline: Outline,
        /// Stroke color.
        color: Color,
        /// Stroke width in device pixels.
        width_px: f64,
    },
    /// A text label, centered on its anchor.
    Text {
        /// World-space anchor.
        anchor: Point,
        /// Label content.
        content: String,
        /// Font size in world units (already divided by the scale, so the
        /// glyphs come out at a constant pixel height).
        size_world: f64,
        /// Text color.
        color: Color,
    },
}

/// A complete frame: clear color, one world-to-view transform, and draw
/// commands in world coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Canvas clear color.
    pub background: Color,
    /// World-to-view transform the backend applies before replaying `cmds`.
    pub view_transform: Affine,
    /// Draw commands in paint order.
    pub cmds: Vec<DrawCmd>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new(background: Color, view_transform: Affine) -> Self {
        Self {
            background,
            view_transform,
            cmds: Vec::new(),
        }
    }
}
