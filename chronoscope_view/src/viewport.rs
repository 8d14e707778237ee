// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Smallest window width used as a divisor.
pub(crate) const MIN_SPAN: f64 = 1e-9;

/// The visible time window, `[min_time, max_time]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// First visible time.
    pub min_time: f64,
    /// Last visible time.
    pub max_time: f64,
}

impl Viewport {
    /// Creates a window from its bounds.
    #[must_use]
    pub fn new(min_time: f64, max_time: f64) -> Self {
        Self { min_time, max_time }
    }

    /// Creates a window of `width` centered on `center`.
    #[must_use]
    pub fn centered(center: f64, width: f64) -> Self {
        let half = width * 0.5;
        Self::new(center - half, center + half)
    }

    /// Width of the window (`max_time - min_time`).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max_time - self.min_time
    }

    /// Midpoint of the window.
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.min_time + self.max_time) * 0.5
    }

    /// The window translated by `dt` time units.
    #[must_use]
    pub fn shifted(&self, dt: f64) -> Self {
        Self::new(self.min_time + dt, self.max_time + dt)
    }

    /// Projects a time into window percent (`0` at `min_time`, `100` at `max_time`).
    ///
    /// A degenerate window is treated as having a tiny positive width.
    #[must_use]
    pub fn time_to_percent(&self, t: f64) -> f64 {
        (t - self.min_time) / self.range().max(MIN_SPAN) * 100.0
    }

    /// Inverse of [`Self::time_to_percent`].
    #[must_use]
    pub fn percent_to_time(&self, percent: f64) -> f64 {
        self.min_time + percent / 100.0 * self.range()
    }

    /// The window as a `Range`.
    #[must_use]
    pub fn as_range(&self) -> Range<f64> {
        self.min_time..self.max_time
    }
}

/// Zoom and pan state of a timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPanState {
    /// Zoom factor; `1.0` shows the whole domain, larger values show less.
    pub zoom_level: f64,
    /// Uncommitted pan in view pixels (live drag preview).
    pub pan_offset: f64,
    /// `true` once the user has panned; zoom then preserves the window center.
    pub manually_set: bool,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self {
            zoom_level: 1.0,
            pan_offset: 0.0,
            manually_set: false,
        }
    }
}
