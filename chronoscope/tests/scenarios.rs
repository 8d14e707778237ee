// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios driven through the public `Timeline` API.

use chrono::NaiveDate;
use chronoscope::{
    CreateRequest, Event, EventId, GestureState, Modifiers, Timeline, TimelineConfig,
    TimelineHandler, TouchPoint,
};
use kurbo::{Point, Vec2};

#[derive(Debug, Default)]
struct Creates(Vec<CreateRequest>);

impl TimelineHandler for Creates {
    fn on_create_request(&mut self, request: &CreateRequest) {
        self.0.push(*request);
    }
}

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn timeline(events: Vec<Event>, width: f64) -> Timeline<Creates> {
    Timeline::new(events, base(), width, TimelineConfig::default(), Creates::default()).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn tap(tl: &mut Timeline<Creates>, x: f64, y: f64, down_ms: u64, up_ms: u64) {
    tl.touch_start(&[TouchPoint::new(1, Point::new(x, y))], down_ms);
    tl.touch_end(&[], up_ms);
}

// ── Scenario A: domain, nesting, instant width ──────────────────────────

#[test]
fn nested_instant_event() {
    let tl = timeline(
        vec![
            Event::new(1, "Phase").with_span(0, 10),
            Event::new(2, "Milestone").with_span(5, 5).with_parent(1),
        ],
        1000.0,
    );

    let domain = tl.domain();
    assert_eq!(domain.padded_min_time, -20.0);
    assert_eq!(domain.padded_max_time, 30.0);
    assert_eq!(domain.time_range, 50.0);

    let layout = tl.layout();
    assert_eq!(layout.len(), 2);
    assert_eq!(layout[0].row.id, EventId(1));
    assert_eq!(layout[1].row.id, EventId(2));
    assert_eq!(layout[1].row.depth, 1);
    assert!(layout[0].row.has_children);

    let bar = layout[1].bar.unwrap();
    assert!(approx(bar.width_pct, TimelineConfig::default().min_bar_width_pct));
    assert!(approx(bar.start_pct, 50.0));
}

// ── Scenario B: zoom to fit ─────────────────────────────────────────────

#[test]
fn zoom_to_fit_frames_data_with_padding() {
    let mut tl = timeline(
        vec![
            Event::new(1, "a").with_span(10, 20),
            Event::new(2, "b").with_span(30, 50),
        ],
        1000.0,
    );
    assert!(tl.zoom_to_fit());

    let vp = tl.viewport();
    assert!(approx(vp.min_time, -6.0), "min was {}", vp.min_time);
    assert!(approx(vp.max_time, 66.0), "max was {}", vp.max_time);
    assert!(!tl.controller().is_manually_set());

    // Later zoom changes stay centered on the fitted data.
    tl.zoom_in();
    assert!(approx(tl.viewport().center(), 30.0));
}

#[test]
fn zoom_to_fit_mid_drag_wins_over_the_drag() {
    let mut tl = timeline(
        vec![
            Event::new(1, "a").with_span(10, 20),
            Event::new(2, "b").with_span(30, 50),
        ],
        1000.0,
    );
    tl.pointer_down(Point::new(500.0, 0.0));
    assert!(tl.zoom_to_fit());
    assert_eq!(tl.gesture_state(), GestureState::Idle);

    tl.pointer_move(Point::new(700.0, 0.0));
    tl.pointer_up();

    let vp = tl.viewport();
    assert!(approx(vp.min_time, -6.0), "min was {}", vp.min_time);
    assert!(approx(vp.max_time, 66.0), "max was {}", vp.max_time);
    assert!(!tl.controller().is_manually_set());
}

#[test]
fn programmatic_zoom_waits_for_open_create_request() {
    let mut tl = timeline(vec![Event::new(1, "a").with_span(0, 100)], 1000.0);
    tl.double_click(Point::new(300.0, 10.0));
    let before = tl.viewport();

    tl.zoom_in();
    assert!(!tl.zoom_to_fit());
    tl.reset_view();
    assert_eq!(tl.viewport(), before);
    assert_eq!(tl.gesture_state(), GestureState::CreatingEvent);
}

#[test]
fn zoom_to_fit_without_timed_events_does_nothing() {
    let mut tl = timeline(vec![Event::new(1, "untimed")], 1000.0);
    let before = tl.viewport();
    assert!(!tl.zoom_to_fit());
    assert_eq!(tl.viewport(), before);
}

// ── Scenario C: double-tap create ───────────────────────────────────────

#[test]
fn double_tap_requests_create_at_first_tap() {
    let mut tl = timeline(Vec::new(), 1000.0);
    assert!(approx(tl.viewport().min_time, 0.0));
    assert!(approx(tl.viewport().max_time, 100.0));

    tap(&mut tl, 100.0, 100.0, 1_000, 1_050);
    assert_eq!(tl.gesture_state(), GestureState::Idle);
    tap(&mut tl, 110.0, 95.0, 1_300, 1_350);

    assert_eq!(tl.gesture_state(), GestureState::CreatingEvent);
    let request = tl.handler().0[0];
    assert_eq!(request.start, 10);
    assert_eq!(request.end, 15);
    assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2025, 1, 11).unwrap());

    // Navigation is frozen until the host closes the request.
    assert!(!tl.wheel(Vec2::new(0.0, -100.0), Modifiers::CTRL));
    tl.finish_create();
    assert!(tl.wheel(Vec2::new(0.0, -100.0), Modifiers::CTRL));
}

#[test]
fn slow_taps_do_not_create() {
    let mut tl = timeline(Vec::new(), 1000.0);
    tap(&mut tl, 100.0, 100.0, 0, 50);
    tap(&mut tl, 100.0, 100.0, 600, 650);
    assert!(tl.handler().0.is_empty());
    assert_eq!(tl.gesture_state(), GestureState::Idle);
}

// ── Scenario D: collapsing a subtree ────────────────────────────────────

#[test]
fn collapsing_a_parent_hides_its_subtree() {
    let mut tl = timeline(
        vec![
            Event::new(1, "parent").with_span(0, 30),
            Event::new(2, "child a").with_span(0, 10).with_parent(1),
            Event::new(3, "child b").with_span(10, 20).with_parent(1),
            Event::new(4, "grandchild").at(12).with_parent(3),
            Event::new(5, "sibling").at(40),
        ],
        1000.0,
    );
    assert_eq!(tl.rows().len(), 5);

    assert!(tl.toggle_collapse(EventId(1)));
    let ids: Vec<EventId> = tl.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, [EventId(1), EventId(5)]);
    assert!(tl.rows()[0].collapsed);

    assert!(!tl.toggle_collapse(EventId(1)));
    assert_eq!(tl.rows().len(), 5);
}

// ── Pan, zoom, and reset ────────────────────────────────────────────────

#[test]
fn zooming_out_past_overview_resets_pan() {
    let mut tl = timeline(vec![Event::new(1, "a").with_span(0, 100)], 1000.0);
    tl.zoom_in();
    tl.pointer_down(Point::new(500.0, 0.0));
    tl.pointer_move(Point::new(200.0, 0.0));
    tl.pointer_up();
    assert!(tl.controller().is_manually_set());

    tl.zoom_out();
    assert!(!tl.controller().is_manually_set());
    assert!(approx(tl.viewport().min_time, tl.domain().padded_min_time));

    tl.zoom_in();
    tl.reset_view();
    assert_eq!(tl.controller().zoom_level(), 1.0);
    assert!(approx(tl.viewport().max_time, tl.domain().padded_max_time));
}

#[test]
fn ticks_for_an_event_far_in_the_future() {
    let tl = timeline(vec![Event::new(1, "far").at(100_000_000_000_000_000)], 1000.0);
    let ticks = tl.ticks();
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|t| t.date.is_none()));
}

#[test]
fn create_outside_the_calendar_is_dropped() {
    let mut tl = timeline(vec![Event::new(1, "far").at(100_000_000_000_000_000)], 1000.0);
    tl.double_click(Point::new(500.0, 10.0));
    assert!(tl.handler().0.is_empty());
    assert!(tl.pending_create().is_none());
    assert_eq!(tl.gesture_state(), GestureState::Idle);
}

#[test]
fn resize_keeps_the_window() {
    let mut tl = timeline(vec![Event::new(1, "a").with_span(0, 100)], 1000.0);
    let before = tl.viewport();
    tl.set_container_width(500.0);
    assert_eq!(tl.viewport(), before);
    assert_eq!(tl.container_width(), 500.0);
}
