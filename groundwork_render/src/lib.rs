// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundwork Render: pure scene building for the layout canvas.
//!
//! [`render`] is a pure function from engine state (panels, viewport,
//! selection, quality) to a [`Scene`]: a plain-old-data display list that
//! any backend can replay. The scene carries one world-to-view [`Affine`]
//! and draw commands in world coordinates, so a backend sets the transform
//! once and draws; screen-constant sizes (stroke widths, label text,
//! selection handles) are pre-divided by the scale.
//!
//! What goes into a frame:
//! - Grid lines with level of detail: major lines always, minor lines only
//!   when they would be legible at the current scale.
//! - Panels that survive viewport culling, in render order.
//! - The selected panel re-drawn last with selection decoration and corner
//!   handles, regardless of its base position in the order.
//! - QC labels (panel and roll numbers) once the scale makes them readable.
//!
//! A [`Quality::Reduced`](groundwork_timing::Quality) signal from the frame
//! monitor sheds the minor grid and labels first; geometry is never dropped.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use groundwork_geometry::{Panel, PanelId, Shape};
//! use groundwork_render::{RenderOptions, render};
//! use groundwork_timing::Quality;
//! use groundwork_view2d::Viewport;
//!
//! let panels = vec![Panel::new(
//!     PanelId(1),
//!     Point::new(390.0, 290.0),
//!     Shape::Rect { width: 20.0, height: 20.0 },
//! )];
//! let mut viewport = Viewport::new(800.0, 600.0);
//! viewport.set_center(Point::new(400.0, 300.0));
//!
//! let scene = render(
//!     &panels,
//!     &viewport,
//!     Some(PanelId(1)),
//!     &RenderOptions::default(),
//!     Quality::Full,
//! );
//! assert!(!scene.cmds.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scene;
mod style;

pub use scene::{DrawCmd, Outline, Scene};
pub use style::{LABEL_MIN_SCALE, MAJOR_GRID, MINOR_GRID, MINOR_GRID_MIN_SCALE};

use alloc::string::String;

use groundwork_geometry::{Panel, PanelId, Shape};
use groundwork_spatial::{Handle, cull};
use groundwork_timing::Quality;
use groundwork_view2d::Viewport;
use kurbo::{Circle, Point, Rect, Vec2};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Per-frame rendering switches.
#[derive(Copy, Clone, Debug, Default)]
pub struct RenderOptions {
    /// Draw culled-panel bounding boxes and the culling rect.
    pub debug_overlay: bool,
}

/// Builds the display list for one frame.
///
/// Pure: no state is mutated, and equal inputs produce equal scenes.
/// Invalid panels are excluded by culling and never drawn.
#[must_use]
pub fn render(
    panels: &[Panel],
    viewport: &Viewport,
    selected: Option<PanelId>,
    options: &RenderOptions,
    quality: Quality,
) -> Scene {
    let mut scene = Scene::new(style::BACKGROUND, viewport.world_to_view_transform());
    let visible = viewport.visible_world_rect();
    let scale = viewport.scale();

    push_grid(&mut scene, visible, scale, quality);

    let margin = style::CULL_MARGIN_PX / scale;
    let kept = cull(panels, visible, margin);

    // Base pass in render order; the selected panel is deferred to the top.
    let mut selected_idx = None;
    for &idx in &kept {
        let panel = &panels[idx];
        if selected == Some(panel.id) {
            selected_idx = Some(idx);
            continue;
        }
        push_panel(&mut scene, panel, false);
    }
    if let Some(idx) = selected_idx {
        push_panel(&mut scene, &panels[idx], true);
        push_handles(&mut scene, &panels[idx], scale);
    }

    if quality == Quality::Full && scale >= LABEL_MIN_SCALE {
        for &idx in &kept {
            push_labels(&mut scene, &panels[idx], scale);
        }
    }

    if options.debug_overlay {
        for &idx in &kept {
            scene.cmds.push(DrawCmd::Stroke {
                outline: Outline::Rect(panels[idx].bounding_box()),
                color: style::DEBUG_BOUNDS,
                width_px: 1.0,
            });
        }
        scene.cmds.push(DrawCmd::Stroke {
            outline: Outline::Rect(visible.inflate(margin, margin)),
            color: style::DEBUG_CULL_RECT,
            width_px: 1.0,
        });
    }

    scene
}

/// Upper bound on grid lines emitted per axis per pass. Far beyond any
/// legible density; purely a stall guard.
const MAX_GRID_LINES: f64 = 65_536.0;

/// Number of `spacing` steps from `lo` up to `hi`, capped.
///
/// Grid lines iterate over this count and compute each coordinate as
/// `lo + i * spacing`: at extreme finite magnitudes one ulp exceeds the
/// spacing, so accumulating `x += spacing` would never advance.
#[expect(
    clippy::cast_possible_truncation,
    reason = "clamped to MAX_GRID_LINES before the cast"
)]
fn line_count(lo: f64, hi: f64, spacing: f64) -> u32 {
    ((hi - lo) / spacing).floor().clamp(0.0, MAX_GRID_LINES) as u32
}

/// Grid pass: major lines always, minor lines only when legible and at
/// full quality.
fn push_grid(scene: &mut Scene, visible: Rect, scale: f64, quality: Quality) {
    let draw_minor = quality == Quality::Full && scale >= MINOR_GRID_MIN_SCALE;
    if draw_minor {
        push_grid_lines(scene, visible, MINOR_GRID, style::GRID_MINOR, 0.5, Some(MAJOR_GRID));
    }
    push_grid_lines(scene, visible, MAJOR_GRID, style::GRID_MAJOR, 1.0, None);
}

/// Emits vertical and horizontal lines at every multiple of `spacing`
/// crossing `visible`. Lines on a multiple of `skip_multiple` are left to
/// the coarser pass.
fn push_grid_lines(
    scene: &mut Scene,
    visible: Rect,
    spacing: f64,
    color: peniko::Color,
    width_px: f64,
    skip_multiple: Option<f64>,
) {
    let is_skipped = |v: f64| {
        skip_multiple.is_some_and(|m| {
            let r = (v / m).round();
            (v - r * m).abs() < spacing * 0.5
        })
    };

    let x0 = (visible.x0 / spacing).floor() * spacing;
    for i in 0..=line_count(x0, visible.x1, spacing) {
        let x = x0 + f64::from(i) * spacing;
        if !is_skipped(x) {
            scene.cmds.push(DrawCmd::Line {
                p0: Point::new(x, visible.y0),
                p1: Point::new(x, visible.y1),
                color,
                width_px,
            });
        }
    }
    let y0 = (visible.y0 / spacing).floor() * spacing;
    for i in 0..=line_count(y0, visible.y1, spacing) {
        let y = y0 + f64::from(i) * spacing;
        if !is_skipped(y) {
            scene.cmds.push(DrawCmd::Line {
                p0: Point::new(visible.x0, y),
                p1: Point::new(visible.x1, y),
                color,
                width_px,
            });
        }
    }
}

/// One panel's filled outline plus stroke, rotation baked into the points.
fn push_panel(scene: &mut Scene, panel: &Panel, selected: bool) {
    let outline = panel_outline(panel);
    let (fill, stroke) = if selected {
        (style::SELECTED_FILL, style::SELECTED_STROKE)
    } else {
        (style::fill_for(&panel.shape), style::stroke_for(&panel.shape))
    };
    scene.cmds.push(DrawCmd::Fill {
        outline,
        color: fill,
    });
    scene.cmds.push(DrawCmd::Stroke {
        outline,
        color: stroke,
        width_px: if selected { 2.0 } else { 1.0 },
    });
}

/// World-space outline of a panel with its rotation applied.
fn panel_outline(panel: &Panel) -> Outline {
    let xf = panel.rotation_transform();
    match panel.shape {
        Shape::Rect { .. } => {
            let b = panel.shape.local_bounds(panel.origin);
            if panel.rotation == 0.0 {
                Outline::Rect(b)
            } else {
                Outline::Quad([
                    xf * b.origin(),
                    xf * Point::new(b.x1, b.y0),
                    xf * Point::new(b.x1, b.y1),
                    xf * Point::new(b.x0, b.y1),
                ])
            }
        }
        Shape::RightTriangle { width, height } => {
            let a = panel.origin;
            let b = a + Vec2::new(width, 0.0);
            let c = a + Vec2::new(0.0, height);
            Outline::Tri([xf * a, xf * b, xf * c])
        }
        Shape::Circle { radius } => Outline::Circle(Circle::new(panel.origin, radius)),
    }
}

/// Selection handles: screen-constant squares on the bounding-box corners.
fn push_handles(scene: &mut Scene, panel: &Panel, scale: f64) {
    let half = style::HANDLE_PX / scale / 2.0;
    let bb = panel.bounding_box();
    for handle in Handle::ALL {
        let c = handle.corner(bb);
        scene.cmds.push(DrawCmd::Fill {
            outline: Outline::Rect(Rect::new(c.x - half, c.y - half, c.x + half, c.y + half)),
            color: style::HANDLE_FILL,
        });
    }
}

/// Panel and roll number labels, sized to a constant screen height.
fn push_labels(scene: &mut Scene, panel: &Panel, scale: f64) {
    let size_world = style::LABEL_PX / scale;
    let center = panel.bounding_box().center();
    let mut line = 0.0;
    for label in [&panel.panel_number, &panel.roll_number]
        .into_iter()
        .flatten()
    {
        scene.cmds.push(DrawCmd::Text {
            anchor: center + Vec2::new(0.0, line * size_world * 1.2),
            content: String::from(label.as_str()),
            size_world,
            color: style::LABEL,
        });
        line += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use groundwork_geometry::{Panel, PanelId, Shape};
    use groundwork_timing::Quality;
    use groundwork_view2d::Viewport;
    use kurbo::Point;

    use super::{DrawCmd, Outline, RenderOptions, render, style};

    fn rect_panel(id: u64, x: f64, y: f64, w: f64, h: f64) -> Panel {
        Panel::new(
            PanelId(id),
            Point::new(x, y),
            Shape::Rect {
                width: w,
                height: h,
            },
        )
    }

    fn viewport_at(cx: f64, cy: f64, scale: f64) -> Viewport {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_center(Point::new(cx, cy));
        vp.set_scale(scale);
        vp
    }

    fn grid_line_count(scene: &super::Scene) -> usize {
        scene
            .cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .count()
    }

    #[test]
    fn minor_grid_disappears_when_zoomed_out() {
        let vp_in = viewport_at(0.0, 0.0, 2.0);
        let vp_out = viewport_at(0.0, 0.0, 0.05);
        let options = RenderOptions::default();

        let zoomed_in = render(&[], &vp_in, None, &options, Quality::Full);
        let zoomed_out = render(&[], &vp_out, None, &options, Quality::Full);

        // Zoomed out, the view spans 16000ft: only major lines, and far
        // fewer lines per world unit.
        let per_ft_in = grid_line_count(&zoomed_in) as f64 / 400.0;
        let per_ft_out = grid_line_count(&zoomed_out) as f64 / 16000.0;
        assert!(per_ft_in > per_ft_out);
    }

    #[test]
    fn grid_terminates_and_stays_bounded_at_extreme_centers() {
        // At coordinates this large one f64 ulp exceeds the grid spacing;
        // the line pass must still finish with a sane number of commands.
        let vp = viewport_at(2e17, -3e16, 1.0);
        let scene = render(&[], &vp, None, &RenderOptions::default(), Quality::Full);
        assert!(!scene.cmds.is_empty());
        assert!(scene.cmds.len() < 10_000);
        assert!(scene.cmds.iter().all(|c| match c {
            DrawCmd::Line { p0, p1, .. } => p0.is_finite() && p1.is_finite(),
            _ => true,
        }));
    }

    #[test]
    fn reduced_quality_sheds_minor_grid_and_labels() {
        let vp = viewport_at(0.0, 0.0, 4.0);
        let mut panel = rect_panel(1, -10.0, -10.0, 20.0, 20.0);
        panel.panel_number = Some("P-101".into());
        let panels = vec![panel];
        let options = RenderOptions::default();

        let full = render(&panels, &vp, None, &options, Quality::Full);
        let reduced = render(&panels, &vp, None, &options, Quality::Reduced);

        assert!(grid_line_count(&reduced) < grid_line_count(&full));
        let has_text = |s: &super::Scene| s.cmds.iter().any(|c| matches!(c, DrawCmd::Text { .. }));
        assert!(has_text(&full));
        assert!(!has_text(&reduced));
    }

    #[test]
    fn offscreen_panels_are_culled() {
        let vp = viewport_at(0.0, 0.0, 1.0);
        // View spans [-400, 400] x [-300, 300]; this panel is far away.
        let panels = vec![rect_panel(1, 5000.0, 5000.0, 10.0, 10.0)];
        let scene = render(&panels, &vp, None, &RenderOptions::default(), Quality::Full);
        let fills = scene
            .cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Fill { .. }))
            .count();
        assert_eq!(fills, 0);
    }

    #[test]
    fn selected_panel_draws_last_with_handles() {
        let vp = viewport_at(0.0, 0.0, 1.0);
        let panels = vec![
            rect_panel(1, -10.0, -10.0, 20.0, 20.0),
            rect_panel(2, 0.0, 0.0, 20.0, 20.0),
        ];
        let scene = render(
            &panels,
            &vp,
            Some(PanelId(1)),
            &RenderOptions::default(),
            Quality::Full,
        );

        // The selected fill must come after the unselected panel's fill.
        let fill_colors: Vec<_> = scene
            .cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Fill { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        let sel_pos = fill_colors
            .iter()
            .position(|c| *c == style::SELECTED_FILL)
            .expect("selected fill present");
        // 4 handle fills follow the selected fill.
        assert_eq!(sel_pos, fill_colors.len() - 5);
        assert_eq!(
            fill_colors
                .iter()
                .filter(|c| **c == style::HANDLE_FILL)
                .count(),
            4
        );
    }

    #[test]
    fn labels_appear_only_above_legibility_scale() {
        let mut panel = rect_panel(1, -10.0, -10.0, 20.0, 20.0);
        panel.panel_number = Some("P-7".into());
        panel.roll_number = Some("R-22".into());
        let panels = vec![panel];
        let options = RenderOptions::default();

        let coarse = render(
            &panels,
            &viewport_at(0.0, 0.0, 0.5),
            None,
            &options,
            Quality::Full,
        );
        let fine = render(
            &panels,
            &viewport_at(0.0, 0.0, 4.0),
            None,
            &options,
            Quality::Full,
        );

        let texts = |s: &super::Scene| {
            s.cmds
                .iter()
                .filter(|c| matches!(c, DrawCmd::Text { .. }))
                .count()
        };
        assert_eq!(texts(&coarse), 0);
        assert_eq!(texts(&fine), 2);
    }

    #[test]
    fn label_size_is_screen_constant() {
        let mut panel = rect_panel(1, -10.0, -10.0, 20.0, 20.0);
        panel.panel_number = Some("P-1".into());
        let panels = vec![panel];
        let options = RenderOptions::default();

        let label_world_size = |scale: f64| {
            let scene = render(
                &panels,
                &viewport_at(0.0, 0.0, scale),
                None,
                &options,
                Quality::Full,
            );
            scene
                .cmds
                .iter()
                .find_map(|c| match c {
                    DrawCmd::Text { size_world, .. } => Some(*size_world),
                    _ => None,
                })
                .expect("label drawn")
        };

        // World-space size shrinks as scale grows, keeping pixels constant.
        let at4 = label_world_size(4.0);
        let at8 = label_world_size(8.0);
        assert!((at4 * 4.0 - at8 * 8.0).abs() < 1e-9);
    }

    #[test]
    fn rotated_rect_is_emitted_as_quad() {
        let vp = viewport_at(0.0, 0.0, 1.0);
        let mut panel = rect_panel(1, -10.0, -10.0, 20.0, 20.0);
        panel.rotation = 30.0;
        let scene = render(
            &[panel],
            &vp,
            None,
            &RenderOptions::default(),
            Quality::Full,
        );
        assert!(scene.cmds.iter().any(|c| matches!(
            c,
            DrawCmd::Fill {
                outline: Outline::Quad(_),
                ..
            }
        )));
    }

    #[test]
    fn debug_overlay_adds_bounds_rects() {
        let vp = viewport_at(0.0, 0.0, 1.0);
        let panels = vec![rect_panel(1, -10.0, -10.0, 20.0, 20.0)];
        let plain = render(&panels, &vp, None, &RenderOptions::default(), Quality::Full);
        let overlay = render(
            &panels,
            &vp,
            None,
            &RenderOptions {
                debug_overlay: true,
            },
            Quality::Full,
        );
        assert!(overlay.cmds.len() > plain.cmds.len());
    }
}
