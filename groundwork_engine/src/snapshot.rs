// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The versioned debug/observability snapshot.

use groundwork_geometry::PanelId;
use groundwork_view2d::ViewportDebugInfo;

use crate::EngineFlags;
use crate::interaction::InteractionKind;

/// Read-only view of the engine internals at one instant.
///
/// `version` increases monotonically with every state mutation, so external
/// consumers (development overlays, automation agents) can cheaply detect
/// change without diffing. The snapshot is advisory: nothing in the engine
/// depends on anyone reading it.
#[derive(Copy, Clone, Debug)]
pub struct EngineSnapshot {
    /// Monotonic state version.
    pub version: u64,
    /// Viewport state and visible world rectangle.
    pub viewport: ViewportDebugInfo,
    /// Current interaction state, payload-free.
    pub interaction: InteractionKind,
    /// Selected panel, if any.
    pub selected: Option<PanelId>,
    /// Total panels in the list, valid or not.
    pub total_panels: usize,
    /// Valid panels intersecting the visible world rectangle.
    pub visible_panels: usize,
    /// Smoothed frame time in milliseconds, if frames were recorded.
    pub average_frame_ms: Option<f64>,
    /// Smoothed frames per second, if frames were recorded.
    pub average_fps: Option<f64>,
    /// Active feature flags.
    pub flags: EngineFlags,
}
