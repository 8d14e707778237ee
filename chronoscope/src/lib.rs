// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronoscope: an interactive timeline view model.
//!
//! [`Timeline`] ties the workspace crates together. Give it events, a base
//! date, and a container width; feed it pointer, wheel, and touch input; and
//! draw what it hands back:
//!
//! - [`Timeline::layout`]: visible rows, indented by nesting, each with its bar
//!   placed in percent of the container.
//! - [`Timeline::ticks`]: axis ticks with their calendar dates.
//! - [`Timeline::untimed`]: events that have no place on the axis yet.
//!
//! Notifications (clicks, edit/delete requests, create requests, base-date
//! changes) arrive through a [`TimelineHandler`].
//!
//! The building blocks are usable on their own:
//! - `chronoscope_time`: events, the padded time domain, dates, and ticks.
//! - `chronoscope_hierarchy`: nesting, collapse, row order, and bar placement.
//! - `chronoscope_view`: zoom and pan over the time domain.
//! - `chronoscope_gesture`: drag, wheel, touch, and tap recognizers.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use chronoscope::{Event, Timeline, TimelineConfig};
//! use kurbo::Point;
//!
//! let events = vec![
//!     Event::new(1, "Design").with_span(10, 30),
//!     Event::new(2, "Review").at(25).with_parent(1),
//!     Event::new(3, "Ship").at(50),
//! ];
//! let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let mut timeline = Timeline::new(events, base, 800.0, TimelineConfig::default(), ()).unwrap();
//!
//! // Fit frames [10, 50] with 40% padding on each side.
//! assert!(timeline.zoom_to_fit());
//! let window = timeline.viewport();
//! assert!((window.min_time + 6.0).abs() < 1e-9);
//! assert!((window.max_time - 66.0).abs() < 1e-9);
//!
//! // Drag right by 80 px: the window moves toward earlier times.
//! timeline.pointer_down(Point::new(400.0, 20.0));
//! timeline.pointer_move(Point::new(480.0, 20.0));
//! timeline.pointer_up();
//! assert!(timeline.viewport().min_time < -6.0);
//!
//! for entry in timeline.layout() {
//!     let indent = entry.row.depth;
//!     if let Some(bar) = entry.bar.filter(|bar| bar.visible) {
//!         let _ = (indent, bar.start_pct, bar.width_pct);
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `serde`: serde derives for events and configuration, and
//!   [`TimelineConfig::from_toml_str`].
//! - `tracing`: `debug`/`trace` logs for gesture transitions, zoom changes,
//!   commits, and create requests.

mod config;
mod create;
mod gesture;
mod handler;
mod timeline;
mod trace;

pub use config::{ConfigError, Platform, TimelineConfig};
pub use create::{CreateRequest, create_request_at};
pub use gesture::{GestureMachine, GestureOutcome, GestureState};
pub use handler::TimelineHandler;
pub use timeline::Timeline;

pub use chronoscope_gesture::touch::TouchPoint;
pub use chronoscope_gesture::wheel::Modifiers;
pub use chronoscope_hierarchy::{BarPosition, Row, RowLayout};
pub use chronoscope_time::{Event, EventId, Tick, TimeDomain, TimeError};
pub use chronoscope_view::{Viewport, ZoomPanState};
