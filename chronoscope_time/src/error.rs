// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use chrono::NaiveDate;

/// Error returned when a time-unit offset cannot be mapped to a calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeError {
    /// `base + offset` days falls outside the calendar range chrono supports.
    OutOfRange {
        /// The base date the offset is relative to.
        base: NaiveDate,
        /// The offending offset, in time units (days).
        offset: i64,
    },
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { base, offset } => write!(
                f,
                "offset of {offset} days from {base} is outside the supported calendar range"
            ),
        }
    }
}

impl core::error::Error for TimeError {}
