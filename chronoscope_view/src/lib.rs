// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronoscope View: the timeline viewport controller.
//!
//! This crate provides a small, headless model of a horizontally zoomable
//! time axis shown in a container of known pixel width. It focuses on:
//! - Zoom / pan state ([`ZoomPanState`]) and the visible window ([`Viewport`]).
//! - Coordinate conversion between time units, pixels, and window percent.
//! - Proportional zoom steps, a zoom floor, and zoom‑to‑fit.
//! - Two-phase panning: a cheap live pixel offset during a drag, and a commit
//!   that folds it into the window when the drag ends.
//!
//! It does **not** know about events, hierarchies, or input devices. Callers
//! are expected to:
//! - Derive a time domain (for example with `chronoscope_time::TimeDomain`).
//! - Translate pointer, wheel, and touch input into zoom/pan calls (see
//!   `chronoscope_gesture` and the `chronoscope` facade).
//! - Project their own items through [`Viewport::time_to_percent`] or
//!   [`ViewportController::time_to_view_x`].
//!
//! ## Minimal example
//!
//! ```rust
//! use chronoscope_view::ViewportController;
//!
//! // Domain [-20, 30] shown in a 1000px wide container.
//! let mut view = ViewportController::new(-20.0..30.0, 1000.0);
//! assert_eq!(view.viewport().as_range(), -20.0..30.0);
//!
//! // Zoom in: the window shrinks proportionally.
//! view.zoom_in();
//! assert!((view.viewport().range() - 50.0 / 1.5).abs() < 1e-9);
//!
//! // Drag 100px to the right and release: earlier times come into view.
//! view.begin_pan();
//! view.set_pan_offset(100.0);
//! view.commit_pan();
//! assert!(view.viewport().min_time < -20.0);
//! assert!(view.is_manually_set());
//! ```
//!
//! ## Design notes
//!
//! - The window width is always `domain_range / zoom_level`; zoom is a single
//!   scalar and only the time axis is zoomed.
//! - Until the user pans, the window is placed automatically at its [`Home`].
//!   After a pan, zoom changes keep the window center instead.
//! - Zoom‑to‑fit installs a new home rather than marking the state as manually
//!   set.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod modes;
mod viewport;

pub use controller::{DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_STEP, ViewportController, ViewportDebugInfo};
pub use modes::Home;
pub use viewport::{Viewport, ZoomPanState};
