// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronoscope_time::Event;
use chronoscope_view::Viewport;

use crate::Row;

/// Minimum bar width, in percent of the window, used for instant events.
pub const DEFAULT_MIN_BAR_WIDTH_PCT: f64 = 0.5;

/// Bars are still considered visible this far (in percent) outside the window.
pub const VISIBLE_MARGIN_PCT: f64 = 10.0;

/// Horizontal placement of an event bar, in percent of the visible window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarPosition {
    /// Left edge.
    pub start_pct: f64,
    /// Width, never below the minimum bar width.
    pub width_pct: f64,
    /// Whether any part of the bar falls within the culling margin.
    pub visible: bool,
}

impl BarPosition {
    /// Right edge.
    #[must_use]
    pub fn end_pct(&self) -> f64 {
        self.start_pct + self.width_pct
    }

    /// Returns `true` if `pct` lies on the bar.
    #[must_use]
    pub fn contains(&self, pct: f64) -> bool {
        pct >= self.start_pct && pct <= self.end_pct()
    }
}

/// Places `event` within `viewport`.
///
/// Events without an end are one time unit long before the minimum width
/// applies. Returns `None` for untimed events.
#[must_use]
pub fn event_position(event: &Event, viewport: &Viewport, min_width_pct: f64) -> Option<BarPosition> {
    let start = event.time_start? as f64;
    let end = event.time_end.map_or(start + 1.0, |end| end as f64);

    let start_pct = viewport.time_to_percent(start);
    let end_pct = viewport.time_to_percent(end);
    let width_pct = (end_pct - start_pct).max(min_width_pct);

    let visible =
        start_pct + width_pct >= -VISIBLE_MARGIN_PCT && start_pct <= 100.0 + VISIBLE_MARGIN_PCT;

    Some(BarPosition {
        start_pct,
        width_pct,
        visible,
    })
}

/// A row paired with its bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    /// The row.
    pub row: Row,
    /// The bar, or `None` for an untimed event.
    pub bar: Option<BarPosition>,
}

/// Places every row of `rows` within `viewport`.
///
/// `rows` must come from a hierarchy built over `events`.
#[must_use]
pub fn layout(
    events: &[Event],
    rows: &[Row],
    viewport: &Viewport,
    min_width_pct: f64,
) -> Vec<RowLayout> {
    rows.iter()
        .map(|row| RowLayout {
            row: *row,
            bar: events
                .get(row.index)
                .and_then(|event| event_position(event, viewport, min_width_pct)),
        })
        .collect()
}

/// Indices of the events that cannot be placed on the axis.
#[must_use]
pub fn untimed(events: &[Event]) -> Vec<usize> {
    events
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.is_timed())
        .map(|(i, _)| i)
        .collect()
}
