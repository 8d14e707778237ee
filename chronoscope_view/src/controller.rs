// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::Point;

use crate::modes::Home;
use crate::viewport::{MIN_SPAN, Viewport, ZoomPanState};

/// Default multiplicative zoom step for [`ViewportController::zoom_in`] / [`ViewportController::zoom_out`].
pub const DEFAULT_ZOOM_STEP: f64 = 1.5;

/// Default lower bound on the zoom level.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Owner of a timeline's zoom/pan state and visible window.
///
/// The controller maps a world‑space time domain onto a container of a given
/// pixel width. Its core invariant is
///
/// ```text
/// viewport.range() == domain_range() / zoom_level
/// ```
///
/// which holds after every mutation except while a live pan is in progress
/// (see [`Self::begin_pan`]). Callers never write the [`Viewport`] directly;
/// they change zoom or pan and the controller re-derives the window.
///
/// Panning is two-phase. During a drag the caller updates a pixel
/// [`pan_offset`](ZoomPanState::pan_offset) that renderers apply as a plain
/// translation, and [`Self::commit_pan`] folds it into the window when the
/// gesture ends.
#[derive(Clone, Debug)]
pub struct ViewportController {
    domain: Range<f64>,
    container_width: f64,
    state: ZoomPanState,
    viewport: Viewport,
    home: Home,
    zoom_step: f64,
    min_zoom: f64,
    panning: bool,
}

impl ViewportController {
    /// Creates a controller over `domain`, shown in a container `container_width` pixels wide.
    ///
    /// - Initial zoom is `1.0`, so the window frames the whole domain.
    /// - The state is not manually set; the window is anchored at the domain start.
    #[must_use]
    pub fn new(domain: Range<f64>, container_width: f64) -> Self {
        let mut controller = Self {
            viewport: Viewport::new(domain.start, domain.end),
            domain,
            container_width,
            state: ZoomPanState::default(),
            home: Home::default(),
            zoom_step: DEFAULT_ZOOM_STEP,
            min_zoom: DEFAULT_MIN_ZOOM,
            panning: false,
        };
        controller.recompute();
        controller
    }

    /// Returns the addressable time domain.
    #[must_use]
    pub fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    /// Width of the domain, floored to a tiny positive value.
    #[must_use]
    pub fn domain_range(&self) -> f64 {
        (self.domain.end - self.domain.start).max(MIN_SPAN)
    }

    /// Installs a new domain (for example after the event set changed) and recomputes.
    pub fn set_domain(&mut self, domain: Range<f64>) {
        if self.domain.start == domain.start && self.domain.end == domain.end {
            return;
        }
        self.domain = domain;
        self.recompute();
    }

    /// Returns the container width in pixels.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Sets the container width in pixels.
    ///
    /// The window is expressed in time units, so resizing does not move it.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    /// Returns the zoom step used by [`Self::zoom_in`] / [`Self::zoom_out`].
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Sets the zoom step. Steps that are not finite and greater than `1.0` are ignored.
    pub fn set_zoom_step(&mut self, step: f64) {
        if step.is_finite() && step > 1.0 {
            self.zoom_step = step;
        }
    }

    /// Returns the zoom floor.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Sets the zoom floor. Non-positive floors are ignored.
    ///
    /// The current zoom is raised to the new floor if needed.
    pub fn set_min_zoom(&mut self, min_zoom: f64) {
        if !(min_zoom.is_finite() && min_zoom > 0.0) {
            return;
        }
        self.min_zoom = min_zoom;
        if self.state.zoom_level < min_zoom {
            self.set_zoom(min_zoom);
        }
    }

    /// Returns a copy of the zoom/pan state.
    #[must_use]
    pub fn state(&self) -> ZoomPanState {
        self.state
    }

    /// Returns the current zoom level.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.state.zoom_level
    }

    /// Returns the uncommitted pan offset in pixels.
    #[must_use]
    pub fn pan_offset(&self) -> f64 {
        self.state.pan_offset
    }

    /// Returns `true` if the window center was established by the user.
    #[must_use]
    pub fn is_manually_set(&self) -> bool {
        self.state.manually_set
    }

    /// Returns the automatic home position.
    #[must_use]
    pub fn home(&self) -> Home {
        self.home
    }

    /// Returns the committed visible window.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Width the window should have at the current zoom: `domain_range() / zoom_level`.
    #[must_use]
    pub fn viewport_range(&self) -> f64 {
        self.domain_range() / self.state.zoom_level.max(MIN_SPAN)
    }

    /// Re-derives the window from the domain and zoom/pan state.
    ///
    /// - While a live pan is in progress this is a no-op.
    /// - If the state is manually set, the window keeps its center and only
    ///   its width changes.
    /// - Otherwise the window is placed at [`Self::home`].
    pub fn recompute(&mut self) {
        if self.panning {
            return;
        }
        let width = self.viewport_range();
        self.viewport = if self.state.manually_set {
            Viewport::centered(self.viewport.center(), width)
        } else {
            match self.home {
                Home::DomainStart => {
                    Viewport::new(self.domain.start, self.domain.start + width)
                }
                Home::Center(center) => Viewport::centered(center, width),
            }
        };
    }

    /// Multiplies the zoom level by the zoom step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.state.zoom_level * self.zoom_step);
    }

    /// Divides the zoom level by the zoom step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.state.zoom_level / self.zoom_step);
    }

    /// Multiplies the zoom level by `factor`. Non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.set_zoom(self.state.zoom_level * factor);
        }
    }

    /// Sets the zoom level, floored at [`Self::min_zoom`].
    ///
    /// Dropping from above `1.0` to `1.0` or below returns to the overview:
    /// the pan offset is cleared, the state is no longer manually set, and the
    /// home position reverts to the domain start.
    pub fn set_zoom(&mut self, zoom_level: f64) {
        if !zoom_level.is_finite() {
            return;
        }
        let old_zoom = self.state.zoom_level;
        let new_zoom = zoom_level.max(self.min_zoom);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return;
        }
        self.state.zoom_level = new_zoom;
        if old_zoom > 1.0 && new_zoom <= 1.0 {
            self.state.pan_offset = 0.0;
            self.state.manually_set = false;
            self.home = Home::DomainStart;
        }
        self.recompute();
    }

    /// Returns to the initial overview: zoom `1.0`, no pan, automatic placement.
    pub fn reset(&mut self) {
        self.state = ZoomPanState::default();
        self.home = Home::DomainStart;
        self.panning = false;
        self.recompute();
    }

    /// Frames `data` with `padding_fraction` of its width added on each side.
    ///
    /// The zoom level becomes `domain_range() / padded_width` with no upper
    /// bound, the window is centered on the data, and the state is marked as
    /// *not* manually set: the fitted center becomes the new home, so later
    /// zoom changes stay centered on it.
    ///
    /// Returns `false` (and changes nothing) for empty or non-finite ranges.
    pub fn zoom_to_fit(&mut self, data: Range<f64>, padding_fraction: f64) -> bool {
        let len = data.end - data.start;
        if !(len.is_finite() && len > 0.0) {
            return false;
        }
        let padding_fraction = padding_fraction.max(0.0);
        let padded = len * (1.0 + 2.0 * padding_fraction);
        let center = (data.start + data.end) * 0.5;

        self.state = ZoomPanState {
            zoom_level: (self.domain_range() / padded).max(self.min_zoom),
            pan_offset: 0.0,
            manually_set: false,
        };
        self.home = Home::Center(center);
        self.panning = false;
        self.viewport = Viewport::centered(center, self.viewport_range());
        true
    }

    /// Starts a live pan. [`Self::recompute`] is suspended until [`Self::commit_pan`].
    pub fn begin_pan(&mut self) {
        self.panning = true;
    }

    /// Returns `true` while a live pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Updates the live pan offset (pixels). The window is not touched.
    pub fn set_pan_offset(&mut self, pan_offset: f64) {
        if pan_offset.is_finite() {
            self.state.pan_offset = pan_offset;
        }
    }

    /// Folds the live pan offset into the window and ends the live pan.
    ///
    /// The pixel offset is converted to time using the current
    /// time‑per‑pixel ratio and subtracted from both ends of the window, so
    /// dragging right reveals earlier times. A non-zero offset marks the state
    /// as manually set. The offset is reset to zero.
    pub fn commit_pan(&mut self) {
        let offset = self.state.pan_offset;
        self.panning = false;
        self.state.pan_offset = 0.0;
        if offset != 0.0 {
            let shift = self.pixels_to_time(offset);
            self.viewport = self.viewport.shifted(-shift);
            self.state.manually_set = true;
        }
        self.recompute();
    }

    /// Pans immediately by `delta` pixels, as if a drag of that size was committed.
    ///
    /// Ignored while a live pan is in progress.
    pub fn pan_by_view(&mut self, delta: f64) {
        if self.panning || !delta.is_finite() || delta == 0.0 {
            return;
        }
        self.state.pan_offset = delta;
        self.commit_pan();
    }

    /// Converts a pixel distance into a time distance at the current zoom.
    #[must_use]
    pub fn pixels_to_time(&self, pixels: f64) -> f64 {
        pixels * self.viewport.range() / self.container_width.max(1.0)
    }

    /// Time units covered by one pixel.
    #[must_use]
    pub fn time_units_per_pixel(&self) -> f64 {
        self.pixels_to_time(1.0)
    }

    /// The window as currently drawn, including the uncommitted pan offset.
    ///
    /// Equal to [`Self::viewport`] whenever the pan offset is zero.
    #[must_use]
    pub fn live_viewport(&self) -> Viewport {
        self.viewport
            .shifted(-self.pixels_to_time(self.state.pan_offset))
    }

    /// Converts a time into a container-relative x coordinate.
    #[must_use]
    pub fn time_to_view_x(&self, t: f64) -> f64 {
        self.live_viewport().time_to_percent(t) / 100.0 * self.container_width
    }

    /// Converts a container-relative x coordinate into a time.
    #[must_use]
    pub fn view_x_to_time(&self, x: f64) -> f64 {
        let live = self.live_viewport();
        live.min_time + x / self.container_width.max(1.0) * live.range()
    }

    /// Convenience conversion from a `Point`, using its X coordinate.
    ///
    /// The timeline only zooms horizontally, so `pt.y` is ignored.
    #[must_use]
    pub fn view_point_to_time(&self, pt: Point) -> f64 {
        self.view_x_to_time(pt.x)
    }

    /// Projects a time into percent of the drawn window.
    #[must_use]
    pub fn time_to_percent(&self, t: f64) -> f64 {
        self.live_viewport().time_to_percent(t)
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            domain: self.domain.clone(),
            container_width: self.container_width,
            viewport: self.viewport,
            live_viewport: self.live_viewport(),
            state: self.state,
            home: self.home,
            zoom_step: self.zoom_step,
            min_zoom: self.min_zoom,
            panning: self.panning,
        }
    }
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Debug)]
pub struct ViewportDebugInfo {
    /// Addressable time domain.
    pub domain: Range<f64>,
    /// Container width in pixels.
    pub container_width: f64,
    /// Committed window.
    pub viewport: Viewport,
    /// Window including the uncommitted pan.
    pub live_viewport: Viewport,
    /// Zoom/pan state.
    pub state: ZoomPanState,
    /// Automatic home position.
    pub home: Home,
    /// Zoom step.
    pub zoom_step: f64,
    /// Zoom floor.
    pub min_zoom: f64,
    /// Whether a live pan is in progress.
    pub panning: bool,
}
