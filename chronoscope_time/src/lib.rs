// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronoscope Time: the time axis of a timeline.
//!
//! This crate models the integer "time unit" axis a timeline is drawn on. A time
//! unit is a whole-day offset from a project-wide base date. It provides:
//! - [`Event`] / [`EventId`]: the records placed on the axis.
//! - [`TimeDomain`]: the padded, addressable extent derived from an event set.
//! - [`DataSpan`]: the unpadded extent of the timed events, used for fitting.
//! - [`time_to_date`] / [`date_to_time`]: conversion between time units and
//!   calendar dates.
//! - [`nice_interval`] / [`generate_ticks`]: "nice number" axis tick placement.
//!
//! It knows nothing about pixels, zoom, or gestures; those live in
//! `chronoscope_view` and `chronoscope_gesture`.
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use chronoscope_time::{Event, TimeDomain, date_to_time, time_to_date};
//!
//! let events = [
//!     Event::new(1, "Kickoff").with_span(0, 10),
//!     Event::new(2, "Review").at(5).with_parent(1),
//! ];
//!
//! let domain = TimeDomain::from_events(&events);
//! assert_eq!(domain.padded_min_time, -20.0);
//! assert_eq!(domain.padded_max_time, 30.0);
//!
//! let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let date = time_to_date(base, 31).unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
//! assert_eq!(date_to_time(base, date), 31);
//! ```
//!
//! ## Degenerate input
//!
//! Nothing in this crate panics on odd event sets. An empty (or entirely
//! untimed) set yields the default `[0, 100]` domain, single-point data is
//! widened to a minimum range, and untimed events are skipped.

mod calendar;
mod domain;
mod error;
mod event;
mod ticks;

pub use calendar::{date_to_time, datetime_to_time, time_to_date};
pub use domain::{DataSpan, MIN_DATA_RANGE, MIN_PADDING, PADDING_FRACTION, TimeDomain};
pub use error::TimeError;
pub use event::{Event, EventId};
pub use ticks::{
    DEFAULT_TICK_TARGET, MAX_TICKS, TICK_CULL_MARGIN_PCT, Tick, generate_ticks, nice_interval,
};
