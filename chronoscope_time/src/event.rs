// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Identifier of an [`Event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EventId(pub u64);

impl From<u64> for EventId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event#{}", self.0)
    }
}

/// A (possibly nested) time-ranged record on the timeline.
///
/// Times are whole time units relative to the project base date. An event
/// without `time_start` is *untimed*: it is never placed on the axis. An event
/// without `time_end` is an *instant* event.
///
/// `time_end >= time_start` is expected but not enforced; inverted ranges are
/// drawn as minimum-width bars.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Unique id.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Start time in time units.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_start: Option<i64>,
    /// End time in time units.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_end: Option<i64>,
    /// Secondary ordering key among siblings with the same start.
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_order: i32,
    /// Parent event, if this event is nested.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent_event_id: Option<EventId>,
}

impl Event {
    /// Creates an untimed root event.
    #[must_use]
    pub fn new(id: impl Into<EventId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            time_start: None,
            time_end: None,
            display_order: 0,
            parent_event_id: None,
        }
    }

    /// Sets both start and end.
    #[must_use]
    pub fn with_span(mut self, start: i64, end: i64) -> Self {
        self.time_start = Some(start);
        self.time_end = Some(end);
        self
    }

    /// Makes this an instant event at `start` (no end time).
    #[must_use]
    pub fn at(mut self, start: i64) -> Self {
        self.time_start = Some(start);
        self.time_end = None;
        self
    }

    /// Nests this event under `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<EventId>) -> Self {
        self.parent_event_id = Some(parent.into());
        self
    }

    /// Sets the sibling ordering key.
    #[must_use]
    pub fn with_display_order(mut self, order: i32) -> Self {
        self.display_order = order;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` if the event has a start time and can be placed on the axis.
    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.time_start.is_some()
    }

    /// Returns `true` for timed events with no end, or with `end == start`.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        match (self.time_start, self.time_end) {
            (Some(_), None) => true,
            (Some(start), Some(end)) => start == end,
            _ => false,
        }
    }

    /// The end used for extent computations: `time_end`, falling back to `time_start`.
    #[must_use]
    pub fn effective_end(&self) -> Option<i64> {
        self.time_start.map(|start| self.time_end.unwrap_or(start))
    }

    /// Sibling sort key: `(time_start or 0, display_order)`.
    #[must_use]
    pub fn sort_key(&self) -> (i64, i32) {
        (self.time_start.unwrap_or(0), self.display_order)
    }
}
