// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;
use chronoscope_time::{Event, EventId};

use crate::CreateRequest;

/// Receives the notifications a [`Timeline`](crate::Timeline) emits.
///
/// Every method defaults to doing nothing, so hosts only implement what they
/// need. The timeline never mutates its events in response to these calls;
/// hosts apply edits and deletions themselves and hand the result back with
/// [`Timeline::set_events`](crate::Timeline::set_events).
pub trait TimelineHandler {
    /// An event was clicked and is now selected.
    fn on_event_click(&mut self, event: &Event) {
        let _ = event;
    }

    /// The user asked to edit an event.
    fn on_event_edit(&mut self, event: &Event) {
        let _ = event;
    }

    /// The user asked to delete the event `id`.
    fn on_event_delete(&mut self, id: EventId) {
        let _ = id;
    }

    /// The user double-clicked or double-tapped empty space.
    ///
    /// The timeline stays in its create state, ignoring navigation input,
    /// until [`Timeline::finish_create`](crate::Timeline::finish_create).
    fn on_create_request(&mut self, request: &CreateRequest) {
        let _ = request;
    }

    /// The base date changed.
    fn on_base_date_change(&mut self, base_date: NaiveDate) {
        let _ = base_date;
    }
}

/// A handler that ignores every notification.
impl TimelineHandler for () {}
