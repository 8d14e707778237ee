// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between time units and calendar dates.
//!
//! One time unit is one day. For integer offsets the two directions are exact
//! inverses: `date_to_time(base, time_to_date(base, t)?) == t`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::TimeError;

const SECONDS_PER_DAY: i64 = 86_400;

/// Returns the calendar date `t` days after `base`.
///
/// # Errors
///
/// [`TimeError::OutOfRange`] if the result is not a representable date.
pub fn time_to_date(base: NaiveDate, t: i64) -> Result<NaiveDate, TimeError> {
    TimeDelta::try_days(t)
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or(TimeError::OutOfRange { base, offset: t })
}

/// Returns the number of days from `base` to `date`.
#[must_use]
pub fn date_to_time(base: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(base).num_days()
}

/// Returns the day difference from midnight of `base` to `at`, rounded to the
/// nearest whole day (halves round up).
#[must_use]
pub fn datetime_to_time(base: NaiveDate, at: NaiveDateTime) -> i64 {
    let seconds = at
        .signed_duration_since(base.and_time(NaiveTime::MIN))
        .num_seconds();
    (seconds + SECONDS_PER_DAY / 2).div_euclid(SECONDS_PER_DAY)
}
