// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing constants: grid spacing, legibility thresholds, and the palette.

use groundwork_geometry::Shape;
use peniko::Color;

/// Major grid spacing in feet; drawn at every zoom level.
pub const MAJOR_GRID: f64 = 100.0;

/// Minor grid spacing in feet; drawn only when legible.
pub const MINOR_GRID: f64 = 10.0;

/// Minimum scale (px per foot) at which minor grid lines are drawn.
///
/// Below this the minor lines would sit under 4 px apart and read as noise.
pub const MINOR_GRID_MIN_SCALE: f64 = 0.4;

/// Minimum scale at which labels are drawn; below this the text would be
/// smaller than the label's pixel size allows.
pub const LABEL_MIN_SCALE: f64 = 2.0;

/// Label height in device pixels, constant across zoom levels.
pub(crate) const LABEL_PX: f64 = 12.0;

/// Selection handle edge length in device pixels.
pub(crate) const HANDLE_PX: f64 = 8.0;

/// Culling margin in device pixels, converted to world units per frame.
pub(crate) const CULL_MARGIN_PX: f64 = 50.0;

pub(crate) const BACKGROUND: Color = Color::from_rgb8(0xf8, 0xf9, 0xfa);
pub(crate) const GRID_MINOR: Color = Color::from_rgb8(0xe2, 0xe6, 0xea);
pub(crate) const GRID_MAJOR: Color = Color::from_rgb8(0xc6, 0xcc, 0xd2);
pub(crate) const LABEL: Color = Color::from_rgb8(0x21, 0x25, 0x29);
pub(crate) const SELECTED_FILL: Color = Color::from_rgb8(0xbb, 0xdd, 0xff);
pub(crate) const SELECTED_STROKE: Color = Color::from_rgb8(0x0d, 0x6e, 0xfd);
pub(crate) const HANDLE_FILL: Color = Color::from_rgb8(0x0d, 0x6e, 0xfd);
pub(crate) const DEBUG_BOUNDS: Color = Color::from_rgb8(0xdc, 0x35, 0x45);
pub(crate) const DEBUG_CULL_RECT: Color = Color::from_rgb8(0xfd, 0x7e, 0x14);

const PANEL_FILL: Color = Color::from_rgb8(0xd7, 0xe8, 0xf7);
const PANEL_STROKE: Color = Color::from_rgb8(0x4a, 0x7b, 0xa6);
const PATCH_FILL: Color = Color::from_rgb8(0xff, 0xe0, 0xb3);
const PATCH_STROKE: Color = Color::from_rgb8(0xc8, 0x7f, 0x0a);

/// Fill color for an unselected panel, by shape role.
pub(crate) fn fill_for(shape: &Shape) -> Color {
    match shape {
        Shape::Rect { .. } | Shape::RightTriangle { .. } => PANEL_FILL,
        Shape::Circle { .. } => PATCH_FILL,
    }
}

/// Stroke color for an unselected panel, by shape role.
pub(crate) fn stroke_for(shape: &Shape) -> Color {
    match shape {
        Shape::Rect { .. } | Shape::RightTriangle { .. } => PANEL_STROKE,
        Shape::Circle { .. } => PATCH_STROKE,
    }
}
