// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::Event;

/// Smallest data range used when deriving a domain or fitting a view.
///
/// Single-point data would otherwise produce a zero-width domain.
pub const MIN_DATA_RANGE: f64 = 10.0;

/// Fraction of the data range added on each side of a derived domain.
pub const PADDING_FRACTION: f64 = 0.25;

/// Lower bound on the padding added on each side of a derived domain.
pub const MIN_PADDING: f64 = 20.0;

/// Unpadded extent of the timed events in a set.
///
/// `min` is the earliest `time_start`, `max` the latest end (falling back to
/// the start for instant events).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataSpan {
    /// Earliest start.
    pub min: i64,
    /// Latest end.
    pub max: i64,
}

impl DataSpan {
    /// Computes the span of the timed events, or `None` if there are none.
    pub fn of<'a, I>(events: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut span: Option<Self> = None;
        for event in events {
            let (Some(start), Some(end)) = (event.time_start, event.effective_end()) else {
                continue;
            };
            span = Some(match span {
                None => Self {
                    min: start,
                    max: end,
                },
                Some(s) => Self {
                    min: s.min.min(start),
                    max: s.max.max(end),
                },
            });
        }
        span
    }

    /// Data range, floored to [`MIN_DATA_RANGE`].
    ///
    /// Inverted spans (only possible with inverted events) also floor.
    #[must_use]
    pub fn range(&self) -> f64 {
        (self.max as f64 - self.min as f64).max(MIN_DATA_RANGE)
    }

    /// Midpoint of the span.
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.min as f64 + self.max as f64) * 0.5
    }

    /// A world-space range of width [`Self::range`] centered on the span.
    #[must_use]
    pub fn as_range(&self) -> Range<f64> {
        let half = self.range() * 0.5;
        let center = self.center();
        (center - half)..(center + half)
    }
}

/// The full addressable extent of the time axis.
///
/// Derived from an event set with [`TimeDomain::from_events`]: the data extent
/// plus padding on both sides, so new events can be created outside the
/// existing data. A domain is a value; derive a new one when events change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeDomain {
    /// Earliest data time (unpadded).
    pub data_min_time: f64,
    /// Latest data time (unpadded).
    pub data_max_time: f64,
    /// Start of the addressable range.
    pub padded_min_time: f64,
    /// End of the addressable range.
    pub padded_max_time: f64,
    /// `padded_max_time - padded_min_time`; always positive.
    pub time_range: f64,
}

impl Default for TimeDomain {
    /// The domain used when no timed events exist: `[0, 100]`.
    fn default() -> Self {
        Self {
            data_min_time: 0.0,
            data_max_time: 100.0,
            padded_min_time: 0.0,
            padded_max_time: 100.0,
            time_range: 100.0,
        }
    }
}

impl TimeDomain {
    /// Derives the domain of an event set.
    ///
    /// Untimed events are ignored; with no timed events the default
    /// `[0, 100]` domain is returned.
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        DataSpan::of(events).map_or_else(Self::default, Self::from_span)
    }

    /// Derives the domain for a known data span.
    #[must_use]
    pub fn from_span(span: DataSpan) -> Self {
        let data_min_time = span.min as f64;
        let data_max_time = span.max as f64;
        let padding = (span.range() * PADDING_FRACTION).max(MIN_PADDING);
        let padded_min_time = data_min_time - padding;
        let padded_max_time = data_max_time + padding;
        Self {
            data_min_time,
            data_max_time,
            padded_min_time,
            padded_max_time,
            time_range: padded_max_time - padded_min_time,
        }
    }

    /// Unpadded span of the timed events, for fitting.
    pub fn data_span<'a, I>(events: I) -> Option<DataSpan>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        DataSpan::of(events)
    }

    /// The padded range as a `Range`.
    #[must_use]
    pub fn padded_range(&self) -> Range<f64> {
        self.padded_min_time..self.padded_max_time
    }

    /// Midpoint of the padded range.
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.padded_min_time + self.padded_max_time) * 0.5
    }

    /// Returns `true` if `t` lies inside the padded range (inclusive).
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.padded_min_time && t <= self.padded_max_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_uses_default_domain() {
        let events: [Event; 0] = [];
        let domain = TimeDomain::from_events(&events);
        assert_eq!(domain.padded_range(), 0.0..100.0);
        assert_eq!(domain.time_range, 100.0);
    }

    #[test]
    fn untimed_only_set_uses_default_domain() {
        let events = [Event::new(1, "a"), Event::new(2, "b")];
        assert_eq!(TimeDomain::from_events(&events), TimeDomain::default());
    }

    #[test]
    fn small_range_uses_padding_floor() {
        let events = [
            Event::new(1, "parent").with_span(0, 10),
            Event::new(2, "child").with_span(5, 5).with_parent(1),
        ];
        let domain = TimeDomain::from_events(&events);
        assert_eq!(domain.data_min_time, 0.0);
        assert_eq!(domain.data_max_time, 10.0);
        assert_eq!(domain.padded_range(), -20.0..30.0);
    }

    #[test]
    fn wide_range_pads_by_a_quarter() {
        let events = [Event::new(1, "a").with_span(0, 400)];
        let domain = TimeDomain::from_events(&events);
        assert_eq!(domain.padded_range(), -100.0..500.0);
        assert_eq!(domain.time_range, 600.0);
    }

    #[test]
    fn hundred_unit_data_covers_expected_domain() {
        let events = [Event::new(1, "a").at(0), Event::new(2, "b").at(100)];
        let domain = TimeDomain::from_events(&events);
        assert!(domain.padded_min_time <= -25.0);
        assert!(domain.padded_max_time >= 125.0);
    }

    #[test]
    fn single_point_is_widened() {
        let events = [Event::new(1, "a").at(42)];
        let domain = TimeDomain::from_events(&events);
        assert!(domain.time_range > 0.0);
        assert!(domain.contains(42.0));
        assert_eq!(domain.center(), 42.0);
    }

    #[test]
    fn data_span_skips_untimed_and_uses_end() {
        let events = [
            Event::new(1, "a"),
            Event::new(2, "b").with_span(10, 50),
            Event::new(3, "c").at(20),
        ];
        let span = TimeDomain::data_span(&events).unwrap();
        assert_eq!(span, DataSpan { min: 10, max: 50 });
        assert_eq!(span.range(), 40.0);
        assert_eq!(span.center(), 30.0);
        assert_eq!(span.as_range(), 10.0..50.0);
    }
}
