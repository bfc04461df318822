// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine state and its event reducer.

use alloc::vec::Vec;

use groundwork_geometry::{Panel, PanelId, Shape};
use groundwork_snap::{SnapConfig, snap};
use groundwork_spatial::{cull, handle_at, hit_test};
use groundwork_timing::{FrameMonitor, Quality};
use groundwork_view2d::Viewport;
use hashbrown::HashSet;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::EngineFlags;
use crate::event::{InputEvent, Key};
use crate::interaction::Interaction;
use crate::snapshot::EngineSnapshot;

/// Tuning knobs with field-level defaults suited to a site plan in feet.
#[derive(Copy, Clone, Debug)]
pub struct EngineConfig {
    /// Grid spacing for grid snap, in feet.
    pub grid_size: f64,
    /// Neighbor-edge capture distance, in feet.
    pub snap_threshold: f64,
    /// Scale multiplier for one zoom-in wheel event.
    pub zoom_in_step: f64,
    /// Scale multiplier for one zoom-out wheel event.
    pub zoom_out_step: f64,
    /// Pixel radius within which a corner handle is grabbable.
    pub handle_tolerance_px: f64,
    /// Smallest extent a resize may produce, in feet.
    pub min_extent: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 10.0,
            snap_threshold: 1.0,
            zoom_in_step: 1.25,
            zoom_out_step: 0.8,
            handle_tolerance_px: 6.0,
            min_extent: 0.5,
        }
    }
}

/// Partial entity update proposed by a gesture.
///
/// `None` fields are untouched; the host persists only what changed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelUpdate {
    /// New world-space anchor, if the gesture moved the panel.
    pub origin: Option<Point>,
    /// New shape extents, if the gesture resized the panel.
    pub shape: Option<Shape>,
}

/// What the host should do in response to an input event.
///
/// Effects describe committed state changes; the engine has already applied
/// them to its own copy. Persisting them (typically debounced) must never
/// block the event loop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Effect {
    /// A panel changed and should be persisted.
    EntityUpdated {
        /// The panel that changed.
        id: PanelId,
        /// The fields that changed.
        update: PanelUpdate,
    },
    /// A panel was deleted.
    EntityRemoved {
        /// The removed panel.
        id: PanelId,
    },
    /// The selection changed.
    SelectionChanged {
        /// Newly selected panel, or `None` on deselect.
        id: Option<PanelId>,
    },
    /// Pan, zoom, or resize changed the viewport (persist last view, etc.).
    ViewportChanged,
}

/// Effect list returned per event; gestures rarely emit more than two.
pub type Effects = SmallVec<[Effect; 2]>;

/// The canvas engine: state owner and event reducer.
///
/// See the crate docs for the state machine and an example.
#[derive(Debug)]
pub struct Engine {
    panels: Vec<Panel>,
    viewport: Viewport,
    interaction: Interaction,
    selected: Option<PanelId>,
    flags: EngineFlags,
    config: EngineConfig,
    monitor: FrameMonitor,
    warned_invalid: HashSet<PanelId>,
    version: u64,
}

impl Engine {
    /// Creates an engine over a canvas of the given pixel size.
    #[must_use]
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            panels: Vec::new(),
            viewport: Viewport::new(view_width, view_height),
            interaction: Interaction::Idle,
            selected: None,
            flags: EngineFlags::empty(),
            config: EngineConfig::default(),
            monitor: FrameMonitor::default(),
            warned_invalid: HashSet::new(),
            version: 0,
        }
    }

    /// Replaces the panel list from the owning store.
    ///
    /// Invalid panels stay in the list but are inert everywhere; each
    /// offending id is logged once. Selection and any gesture targeting a
    /// panel that no longer exists are cleared.
    pub fn set_panels(&mut self, panels: Vec<Panel>) {
        for panel in &panels {
            if !panel.is_valid() && self.warned_invalid.insert(panel.id) {
                log::warn!(
                    "panel {:?} has non-positive extents or non-finite coordinates; \
                     excluded from rendering and hit testing",
                    panel.id
                );
            }
        }
        self.panels = panels;

        if let Some(id) = self.selected
            && self.panel(id).is_none()
        {
            self.selected = None;
        }
        match self.interaction {
            Interaction::Dragging { id, .. } | Interaction::Resizing { id, .. }
                if self.panel(id).is_none() =>
            {
                self.interaction = Interaction::Idle;
            }
            _ => {}
        }
        self.version += 1;
    }

    /// The panel list, render-ordered.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// The viewport (read-only).
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The viewport, for host-driven adjustments (initial view, fit).
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        self.version += 1;
        &mut self.viewport
    }

    /// Currently selected panel, if any.
    #[must_use]
    pub fn selected(&self) -> Option<PanelId> {
        self.selected
    }

    /// Current interaction state.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Active feature flags.
    #[must_use]
    pub fn flags(&self) -> EngineFlags {
        self.flags
    }

    /// Replaces the feature flags.
    pub fn set_flags(&mut self, flags: EngineFlags) {
        self.flags = flags;
        self.version += 1;
    }

    /// Replaces the tuning configuration.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
        self.version += 1;
    }

    /// Centers and scales the viewport to show every valid panel.
    pub fn fit_to_content(&mut self) {
        let mut bounds: Option<Rect> = None;
        for panel in self.panels.iter().filter(|p| p.is_valid()) {
            let bb = panel.bounding_box();
            bounds = Some(bounds.map_or(bb, |b| b.union(bb)));
        }
        if let Some(bounds) = bounds {
            self.viewport.fit_rect(bounds);
            self.version += 1;
        }
    }

    /// Records one frame's render duration (milliseconds) for the quality
    /// signal.
    pub fn note_frame(&mut self, duration_ms: f64) {
        self.monitor.note_frame(duration_ms);
    }

    /// Advisory rendering quality derived from recent frame times.
    #[must_use]
    pub fn quality(&self) -> Quality {
        self.monitor.quality()
    }

    /// Versioned, read-only view of the engine internals.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let visible = cull(&self.panels, self.viewport.visible_world_rect(), 0.0).len();
        EngineSnapshot {
            version: self.version,
            viewport: self.viewport.debug_info(),
            interaction: self.interaction.kind(),
            selected: self.selected,
            total_panels: self.panels.len(),
            visible_panels: visible,
            average_frame_ms: self.monitor.average_ms(),
            average_fps: self.monitor.average_fps(),
            flags: self.flags,
        }
    }

    /// Applies one input event and returns the effects for the host.
    ///
    /// At most one state mutation happens per event; the scene rendered
    /// after this call reflects the fully applied state.
    pub fn handle_event(&mut self, event: InputEvent) -> Effects {
        let before = self.interaction;
        let effects = match event {
            InputEvent::PointerDown { pos } => self.on_pointer_down(pos),
            InputEvent::PointerMove { pos } => self.on_pointer_move(pos),
            InputEvent::PointerUp { .. }
            | InputEvent::PointerLeave
            | InputEvent::PointerCancel => self.end_gesture(),
            InputEvent::Wheel { pos, ticks } => self.on_wheel(pos, ticks),
            InputEvent::KeyDown(key) => self.on_key(key),
            InputEvent::Resized { width, height } => {
                self.viewport.set_view_size(width, height);
                SmallVec::from_slice(&[Effect::ViewportChanged])
            }
        };
        // State transitions without effects (a resize grab, a gesture
        // ending) still advance the snapshot version.
        if !effects.is_empty() || self.interaction != before {
            self.version += 1;
        }
        effects
    }

    fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id == id)
    }

    fn on_pointer_down(&mut self, pos: Point) -> Effects {
        if self.interaction != Interaction::Idle {
            // A second button press mid-gesture is ignored; the active
            // gesture still terminates through up/leave/cancel.
            return Effects::new();
        }
        let world = self.viewport.view_to_world_point(pos);

        // A press on the selected panel's corner handle starts a resize.
        if let Some(id) = self.selected
            && let Some(panel) = self.panel(id)
        {
            let tolerance = self.config.handle_tolerance_px * self.viewport.world_units_per_pixel();
            if let Some(handle) = handle_at(panel, world, tolerance) {
                let fixed = handle.opposite().corner(panel.bounding_box());
                self.interaction = Interaction::Resizing { id, handle, fixed };
                return Effects::new();
            }
        }

        match hit_test(&self.panels, world) {
            Some(id) => {
                // hit_test only returns ids present in the list.
                let origin = self.panel(id).map(|p| p.origin).unwrap_or_default();
                self.interaction = Interaction::Dragging {
                    id,
                    grab_offset: world - origin,
                };
                if self.selected != Some(id) {
                    self.selected = Some(id);
                    return Effects::from_slice(&[Effect::SelectionChanged { id: Some(id) }]);
                }
                Effects::new()
            }
            None => {
                self.interaction = Interaction::Panning { last: pos };
                if self.selected.take().is_some() {
                    return Effects::from_slice(&[Effect::SelectionChanged { id: None }]);
                }
                Effects::new()
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Point) -> Effects {
        match self.interaction {
            Interaction::Idle => Effects::new(),
            Interaction::Panning { last } => {
                self.viewport.pan_by_view(pos - last);
                self.interaction = Interaction::Panning { last: pos };
                Effects::from_slice(&[Effect::ViewportChanged])
            }
            Interaction::Dragging { id, grab_offset } => self.drag_to(id, pos, grab_offset),
            Interaction::Resizing { id, fixed, .. } => self.resize_to(id, pos, fixed),
        }
    }

    fn drag_to(&mut self, id: PanelId, pos: Point, grab_offset: Vec2) -> Effects {
        let Some(moving) = self.panel(id).cloned() else {
            self.interaction = Interaction::Idle;
            return Effects::new();
        };
        let world = self.viewport.view_to_world_point(pos);
        let proposed = world - grab_offset;

        let config = SnapConfig {
            grid: self
                .flags
                .contains(EngineFlags::GRID_SNAP)
                .then_some(self.config.grid_size),
            neighbor_threshold: self
                .flags
                .contains(EngineFlags::NEIGHBOR_SNAP)
                .then_some(self.config.snap_threshold),
        };
        let result = snap(&config, &moving, proposed, &self.panels);
        if !result.origin.is_finite() || result.origin == moving.origin {
            return Effects::new();
        }

        if let Some(panel) = self.panel_mut(id) {
            panel.origin = result.origin;
        }
        Effects::from_slice(&[Effect::EntityUpdated {
            id,
            update: PanelUpdate {
                origin: Some(result.origin),
                shape: None,
            },
        }])
    }

    fn resize_to(&mut self, id: PanelId, pos: Point, fixed: Point) -> Effects {
        let world = self.viewport.view_to_world_point(pos);
        if !world.is_finite() {
            return Effects::new();
        }
        let min = self.config.min_extent;
        let width = (world.x - fixed.x).abs().max(min);
        let height = (world.y - fixed.y).abs().max(min);
        let x0 = if world.x >= fixed.x { fixed.x } else { fixed.x - width };
        let y0 = if world.y >= fixed.y { fixed.y } else { fixed.y - height };

        let Some(panel) = self.panel_mut(id) else {
            self.interaction = Interaction::Idle;
            return Effects::new();
        };
        let (origin, shape) = match panel.shape {
            Shape::Rect { .. } => (Point::new(x0, y0), Shape::Rect { width, height }),
            Shape::RightTriangle { .. } => {
                (Point::new(x0, y0), Shape::RightTriangle { width, height })
            }
            Shape::Circle { .. } => {
                // Circles stay circular: the smaller box extent wins.
                let radius = (width.min(height) / 2.0).max(min / 2.0);
                (
                    Point::new(x0 + width / 2.0, y0 + height / 2.0),
                    Shape::Circle { radius },
                )
            }
        };
        if origin == panel.origin && shape == panel.shape {
            return Effects::new();
        }
        panel.origin = origin;
        panel.shape = shape;
        Effects::from_slice(&[Effect::EntityUpdated {
            id,
            update: PanelUpdate {
                origin: Some(origin),
                shape: Some(shape),
            },
        }])
    }

    fn end_gesture(&mut self) -> Effects {
        if self.interaction != Interaction::Idle {
            self.interaction = Interaction::Idle;
        }
        Effects::new()
    }

    fn on_wheel(&mut self, pos: Point, ticks: f64) -> Effects {
        if self.interaction != Interaction::Idle || ticks == 0.0 || !ticks.is_finite() {
            return Effects::new();
        }
        let factor = if ticks > 0.0 {
            self.config.zoom_in_step
        } else {
            self.config.zoom_out_step
        };
        let before = self.viewport.scale();
        self.viewport.zoom_about_view_point(pos, factor);
        if self.viewport.scale() == before {
            return Effects::new();
        }
        Effects::from_slice(&[Effect::ViewportChanged])
    }

    fn on_key(&mut self, key: Key) -> Effects {
        match key {
            Key::Delete => {
                if self.interaction != Interaction::Idle {
                    return Effects::new();
                }
                let Some(id) = self.selected.take() else {
                    return Effects::new();
                };
                self.panels.retain(|p| p.id != id);
                Effects::from_slice(&[
                    Effect::EntityRemoved { id },
                    Effect::SelectionChanged { id: None },
                ])
            }
            Key::Escape => {
                self.interaction = Interaction::Idle;
                if self.selected.take().is_some() {
                    Effects::from_slice(&[Effect::SelectionChanged { id: None }])
                } else {
                    Effects::new()
                }
            }
        }
    }
}
