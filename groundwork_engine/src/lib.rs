// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundwork Engine: the interaction core of the panel-layout canvas.
//!
//! [`Engine`] owns the engine state (panel list, viewport, interaction
//! state, selection) and consumes host input events through one reducer,
//! [`Engine::handle_event`]. Each event applies at most one state mutation
//! and returns the [`Effect`]s the host should act on: entity updates to
//! persist, selection changes, viewport changes. The engine itself performs
//! no I/O; persistence, debouncing, and network calls stay on the host side
//! of the callback boundary.
//!
//! ## Interaction state machine
//!
//! ```text
//!               pointer down, no hit            pointer down on panel
//!        ┌────────────────────────── Idle ──────────────────────────┐
//!        ▼                            ▲ ▲                           ▼
//!     Panning ──── up/leave/cancel ───┘ └─── up/leave/cancel ── Dragging
//!                                       │
//!                 pointer down on a selection handle
//!                                       ▼
//!                                    Resizing ── up/leave/cancel ──► Idle
//! ```
//!
//! `pointerleave` and `pointercancel` are handled exactly like `pointerup`:
//! every gesture has a guaranteed path back to `Idle` even when the
//! terminating event arrives from outside the canvas. Hosts should listen
//! for pointer-up globally (on the window) during an active gesture and
//! forward it here.
//!
//! Wheel events zoom about the cursor (multiplicative steps, clamped scale),
//! so the world point under the pointer stays put. Dragging routes the
//! proposed position through `groundwork_snap` when the corresponding
//! feature flags are set.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use groundwork_geometry::{Panel, PanelId, Shape};
//! use groundwork_engine::{Effect, Engine, InputEvent};
//!
//! let mut engine = Engine::new(800.0, 600.0);
//! engine.set_panels(vec![Panel::new(
//!     PanelId(1),
//!     Point::new(390.0, 290.0),
//!     Shape::Rect { width: 20.0, height: 20.0 },
//! )]);
//! engine.viewport_mut().set_center(Point::new(400.0, 300.0));
//!
//! // Press on the panel: it becomes selected and a drag begins.
//! let effects = engine.handle_event(InputEvent::PointerDown {
//!     pos: Point::new(400.0, 300.0),
//! });
//! assert!(matches!(
//!     effects.as_slice(),
//!     [Effect::SelectionChanged { id: Some(PanelId(1)) }]
//! ));
//! ```
//!
//! ## Observability
//!
//! [`Engine::snapshot`] returns a versioned, read-only view of the engine
//! internals (viewport, interaction kind, entity counts, frame stats) for
//! development overlays and external consumers such as automation agents.
//! It is the documented alternative to reaching into engine state, and is
//! never required for correctness.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod event;
mod interaction;
mod snapshot;

pub use engine::{Effect, Effects, Engine, EngineConfig, PanelUpdate};
pub use event::{InputEvent, Key};
pub use interaction::{Interaction, InteractionKind};
pub use snapshot::EngineSnapshot;

bitflags::bitflags! {
    /// Runtime feature switches supplied by the host.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct EngineFlags: u32 {
        /// Round dragged positions to the coordinate grid.
        const GRID_SNAP = 1 << 0;
        /// Align dragged edges flush with nearby panel edges.
        const NEIGHBOR_SNAP = 1 << 1;
        /// Ask the renderer for debug decorations (bounds, culling rect).
        const DEBUG_OVERLAY = 1 << 2;
    }
}
