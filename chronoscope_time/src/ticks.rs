// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis tick placement.

use core::ops::Range;

use chrono::NaiveDate;

use crate::time_to_date;

/// Default number of ticks aimed for across the visible window.
pub const DEFAULT_TICK_TARGET: usize = 15;

/// Ticks further than this many percent outside `[0, 100]` are culled.
pub const TICK_CULL_MARGIN_PCT: f64 = 10.0;

/// A labeled position on the time axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Time of the tick, in time units.
    pub time: i64,
    /// Position relative to the window, where `0` is its start and `100` its end.
    pub percent: f64,
    /// Calendar date of the tick, if representable.
    pub date: Option<NaiveDate>,
}

/// Returns a "nice" tick spacing for a window of width `range`.
///
/// The raw spacing `range / target` is rounded up along a 1-2-5-10 ladder
/// over powers of ten. The axis is integral, so the result is never below
/// one time unit.
#[must_use]
pub fn nice_interval(range: f64, target: usize) -> f64 {
    let target = target.max(1) as f64;
    let desired = range.abs() / target;
    if !desired.is_finite() || desired <= 1.0 {
        return 1.0;
    }

    let mut unit = 1.0_f64;
    while unit * 10.0 <= desired {
        unit *= 10.0;
    }
    for m in [1.0_f64, 2.0, 5.0] {
        let step = m * unit;
        if step >= desired {
            return step;
        }
    }
    unit * 10.0
}

/// Upper bound on the ticks a single call produces.
pub const MAX_TICKS: usize = 1000;

/// Generates ticks for the visible `window`.
///
/// Ticks are placed on multiples of [`nice_interval`]. Candidates are drawn
/// from the window widened by [`TICK_CULL_MARGIN_PCT`] on each side, so a
/// caller translating the window during a live pan still has ticks at the
/// edges; anything projecting outside `[-10, 110]` percent is culled.
///
/// Tick times are stepped as integers, so windows far from the origin (where
/// adjacent `f64` values are more than one interval apart) still terminate.
/// At most [`MAX_TICKS`] candidates are considered.
#[must_use]
pub fn generate_ticks(window: Range<f64>, base: NaiveDate, target: usize) -> Vec<Tick> {
    let span = window.end - window.start;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }

    let interval = nice_interval(span, target);
    let margin = span * TICK_CULL_MARGIN_PCT / 100.0;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "intervals are whole units and `as` saturates out-of-range multiples"
    )]
    let (step, first, last) = (
        interval as i64,
        ((window.start - margin) / interval).ceil() as i64,
        ((window.end + margin) / interval).floor() as i64,
    );

    let mut ticks = Vec::new();
    for k in (first..=last).take(MAX_TICKS) {
        let Some(time) = k.checked_mul(step) else {
            break;
        };
        let percent = (time as f64 - window.start) / span * 100.0;
        if (-TICK_CULL_MARGIN_PCT..=100.0 + TICK_CULL_MARGIN_PCT).contains(&percent) {
            ticks.push(Tick {
                time,
                percent,
                date: time_to_date(base, time).ok(),
            });
        }
    }
    ticks
}
