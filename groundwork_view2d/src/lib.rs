// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundwork View 2D: the viewport mapping a site plan onto a canvas.
//!
//! A layout drawing covers thousands of feet; the canvas covers a few hundred
//! pixels. [`Viewport`] owns that mapping: a uniform scale (pixels per foot)
//! plus the world point shown at the canvas center. It focuses on:
//! - Coordinate conversion between world (feet) and view/device (pixels).
//! - Anchored zooming: the world point under the cursor stays put.
//! - Scale clamping and sanitization so the view is always renderable.
//! - Deriving the visible world rectangle for culling and grid drawing.
//!
//! It does **not** own entities, interaction, or rendering; those live in
//! the other `groundwork_*` crates.
//!
//! ## Convention
//!
//! One convention is used throughout the engine, the center-based one:
//!
//! ```text
//! view = (world - center) * scale + view_size / 2
//! ```
//!
//! Mixing this with an offset-based convention inside one engine instance is
//! a correctness hazard; conversions in other crates always go through this
//! type.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use groundwork_view2d::Viewport;
//!
//! let mut view = Viewport::new(800.0, 600.0);
//! view.set_center(Point::new(500.0, 500.0));
//!
//! // The center of the canvas shows the viewport center.
//! let p = view.world_to_view_point(Point::new(500.0, 500.0));
//! assert_eq!(p, Point::new(400.0, 300.0));
//!
//! // Conversions round-trip.
//! let world = view.view_to_world_point(Point::new(12.0, 34.0));
//! let back = view.world_to_view_point(world);
//! assert!((back.x - 12.0).abs() < 1e-9);
//! assert!((back.y - 34.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, Viewport, ViewportDebugInfo};
