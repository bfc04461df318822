// Copyright 2026 the Groundwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundwork Timing: advisory frame-time monitoring.
//!
//! The renderer can shed detail (minor grid lines, labels) when frames run
//! long. [`FrameMonitor`] is the host-agnostic piece of that loop: the host
//! measures each render and feeds the duration in; the monitor keeps an
//! exponential moving average and reports a [`Quality`] signal.
//!
//! The signal is advisory only. It never blocks, cancels, or schedules
//! frames; it has no clock of its own, so it works the same under
//! `requestAnimationFrame`, winit's event loop, or a test harness feeding
//! synthetic durations.
//!
//! Quality drops to [`Quality::Reduced`] only after a run of consecutive
//! slow samples (a single GC pause or layout hiccup should not degrade the
//! drawing), and recovers as soon as the average settles back under the
//! threshold.
//!
//! ## Example
//!
//! ```rust
//! use groundwork_timing::{FrameMonitor, Quality};
//!
//! let mut monitor = FrameMonitor::default();
//! assert_eq!(monitor.quality(), Quality::Full);
//!
//! // A sustained stretch of 30ms frames trips the reduced-quality signal.
//! for _ in 0..10 {
//!     monitor.note_frame(30.0);
//! }
//! assert_eq!(monitor.quality(), Quality::Reduced);
//!
//! // Fast frames pull the average back down and quality recovers.
//! for _ in 0..60 {
//!     monitor.note_frame(4.0);
//! }
//! assert_eq!(monitor.quality(), Quality::Full);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Rendering detail level requested from the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Quality {
    /// Draw everything.
    #[default]
    Full,
    /// Shed optional detail (minor grid, labels) to recover frame budget.
    Reduced,
}

/// Exponential-moving-average frame-time monitor.
///
/// Defaults: 16 ms threshold (one 60 Hz frame), EMA alpha `0.2`, and five
/// consecutive slow samples required before quality drops.
#[derive(Copy, Clone, Debug)]
pub struct FrameMonitor {
    threshold_ms: f64,
    alpha: f64,
    slow_samples_to_trip: u32,
    average_ms: Option<f64>,
    consecutive_slow: u32,
    reduced: bool,
}

impl Default for FrameMonitor {
    fn default() -> Self {
        Self::new(16.0, 0.2, 5)
    }
}

impl FrameMonitor {
    /// Creates a monitor with an explicit threshold, EMA alpha, and trip
    /// count.
    ///
    /// `alpha` is clamped to `(0, 1]`; `slow_samples_to_trip` of zero is
    /// treated as one.
    #[must_use]
    pub fn new(threshold_ms: f64, alpha: f64, slow_samples_to_trip: u32) -> Self {
        Self {
            threshold_ms,
            alpha: if alpha > 0.0 && alpha <= 1.0 { alpha } else { 0.2 },
            slow_samples_to_trip: slow_samples_to_trip.max(1),
            average_ms: None,
            consecutive_slow: 0,
            reduced: false,
        }
    }

    /// Records one frame's render duration in milliseconds.
    ///
    /// Non-finite or negative samples are ignored.
    pub fn note_frame(&mut self, duration_ms: f64) {
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return;
        }
        let avg = match self.average_ms {
            Some(avg) => avg + self.alpha * (duration_ms - avg),
            None => duration_ms,
        };
        self.average_ms = Some(avg);

        if avg > self.threshold_ms {
            self.consecutive_slow = self.consecutive_slow.saturating_add(1);
            if self.consecutive_slow >= self.slow_samples_to_trip {
                self.reduced = true;
            }
        } else {
            self.consecutive_slow = 0;
            self.reduced = false;
        }
    }

    /// Current advisory quality signal.
    #[must_use]
    pub fn quality(&self) -> Quality {
        if self.reduced {
            Quality::Reduced
        } else {
            Quality::Full
        }
    }

    /// Smoothed frame time in milliseconds, if any samples were recorded.
    #[must_use]
    pub fn average_ms(&self) -> Option<f64> {
        self.average_ms
    }

    /// Smoothed frames-per-second, if any samples were recorded.
    #[must_use]
    pub fn average_fps(&self) -> Option<f64> {
        self.average_ms
            .filter(|ms| *ms > 0.0)
            .map(|ms| 1000.0 / ms)
    }

    /// Forgets all samples and resets quality to [`Quality::Full`].
    pub fn reset(&mut self) {
        self.average_ms = None;
        self.consecutive_slow = 0;
        self.reduced = false;
    }
}
