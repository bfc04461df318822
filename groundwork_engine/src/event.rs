// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input events consumed by the engine reducer.

use kurbo::Point;

/// Keyboard shortcuts the engine understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Remove the selected panel.
    Delete,
    /// Clear the selection and abort any active gesture.
    Escape,
}

/// One input event, already translated to canvas-local pixel coordinates.
///
/// The host is responsible for capturing pointer events globally during an
/// active gesture and forwarding them here; positions may therefore lie
/// outside the canvas bounds, which is fine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown {
        /// Pointer position in view/device pixels.
        pos: Point,
    },
    /// Pointer moved.
    PointerMove {
        /// Pointer position in view/device pixels.
        pos: Point,
    },
    /// Primary button released.
    PointerUp {
        /// Pointer position in view/device pixels.
        pos: Point,
    },
    /// Pointer left the canvas. Terminates gestures like a pointer up.
    PointerLeave,
    /// Pointer capture was lost. Terminates gestures like a pointer up.
    PointerCancel,
    /// Wheel/scroll. Positive `ticks` zoom in, negative zoom out; one
    /// multiplicative scale step is applied per event.
    Wheel {
        /// Zoom anchor in view/device pixels.
        pos: Point,
        /// Signed wheel movement; only the sign is used.
        ticks: f64,
    },
    /// Keyboard shortcut.
    KeyDown(Key),
    /// The host container resized the canvas.
    Resized {
        /// New canvas width in pixels.
        width: f64,
        /// New canvas height in pixels.
        height: f64,
    },
}
