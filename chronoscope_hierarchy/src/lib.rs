// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronoscope Hierarchy: rows and bars for nested timeline events.
//!
//! Events may name a parent. This crate turns a flat event slice into the
//! ordered, indented rows a timeline draws, and places each row's bar inside a
//! visible time window.
//!
//! - [`EventHierarchy`]: parent to ordered children, built once per event set.
//! - [`CollapsedParents`]: which parents currently hide their subtrees.
//! - [`EventHierarchy::rows`]: the depth-first row order, honoring collapse.
//! - [`event_position`] / [`layout`]: bar placement in window percent.
//!
//! Everything is addressed by index into the event slice, so the hierarchy
//! holds no references and can be rebuilt cheaply when events change.
//!
//! ## Example
//!
//! ```rust
//! use chronoscope_hierarchy::{CollapsedParents, EventHierarchy, event_position};
//! use chronoscope_time::{Event, EventId};
//! use chronoscope_view::Viewport;
//!
//! let events = [
//!     Event::new(1, "Phase").with_span(0, 10),
//!     Event::new(2, "Milestone").with_span(5, 5).with_parent(1),
//! ];
//! let hierarchy = EventHierarchy::new(&events);
//! let mut collapsed = CollapsedParents::new();
//!
//! let rows = hierarchy.rows(&collapsed);
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[1].depth, 1);
//!
//! collapsed.toggle(EventId(1));
//! assert_eq!(hierarchy.rows(&collapsed).len(), 1);
//!
//! let bar = event_position(&events[1], &Viewport::new(-20.0, 30.0), 0.5).unwrap();
//! assert_eq!(bar.width_pct, 0.5);
//! ```

mod collapse;
mod layout;
mod tree;

pub use collapse::CollapsedParents;
pub use layout::{
    BarPosition, DEFAULT_MIN_BAR_WIDTH_PCT, RowLayout, VISIBLE_MARGIN_PCT, event_position, layout,
    untimed,
};
pub use tree::{EventHierarchy, Row};
