// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state machine's states.

use groundwork_geometry::PanelId;
use groundwork_spatial::Handle;
use kurbo::{Point, Vec2};

/// Current interaction state of the canvas.
///
/// Exactly one gesture is active at a time; every non-idle state returns to
/// [`Interaction::Idle`] on pointer up, leave, or cancel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Interaction {
    /// No gesture in progress.
    Idle,
    /// The empty canvas is being dragged; the viewport follows the pointer.
    Panning {
        /// Pointer position (view px) at the previous event.
        last: Point,
    },
    /// A panel is being moved.
    Dragging {
        /// The panel under the gesture.
        id: PanelId,
        /// World-space offset from the panel anchor to the initial grab
        /// point; keeps the panel from jumping to the cursor.
        grab_offset: Vec2,
    },
    /// A selected panel is being resized by a corner handle.
    Resizing {
        /// The panel under the gesture.
        id: PanelId,
        /// The handle being dragged.
        handle: Handle,
        /// World-space corner that stays fixed during the resize.
        fixed: Point,
    },
}

impl Interaction {
    /// The state's discriminant, for snapshots and assertions.
    #[must_use]
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::Idle => InteractionKind::Idle,
            Self::Panning { .. } => InteractionKind::Panning,
            Self::Dragging { .. } => InteractionKind::Dragging,
            Self::Resizing { .. } => InteractionKind::Resizing,
        }
    }
}

/// Payload-free view of [`Interaction`] for the debug snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    /// No gesture in progress.
    Idle,
    /// Viewport pan.
    Panning,
    /// Panel move.
    Dragging,
    /// Panel resize.
    Resizing,
}
