// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;
use chronoscope_time::{TimeError, time_to_date};
use chronoscope_view::Viewport;

/// A proposed new event, produced by double-click or double-tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateRequest {
    /// Start time in time units.
    pub start: i64,
    /// End time in time units.
    pub end: i64,
    /// Calendar date of `start`.
    pub start_date: NaiveDate,
    /// Calendar date of `end`.
    pub end_date: NaiveDate,
}

/// Builds the create request for a double-click at container x `x`.
///
/// The start is the time under the pointer, rounded to the nearest time unit;
/// the end is `duration` units later. `container_width` below one pixel is
/// treated as one pixel.
pub fn create_request_at(
    viewport: &Viewport,
    x: f64,
    container_width: f64,
    base_date: NaiveDate,
    duration: i64,
) -> Result<CreateRequest, TimeError> {
    let t = viewport.min_time + x / container_width.max(1.0) * viewport.range();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "pointer positions map into the visible window, far inside i64"
    )]
    let start = t.round() as i64;
    let end = start.saturating_add(duration);
    Ok(CreateRequest {
        start,
        end,
        start_date: time_to_date(base_date, start)?,
        end_date: time_to_date(base_date, end)?,
    })
}
