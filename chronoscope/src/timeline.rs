// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;
use chronoscope_gesture::touch::TouchPoint;
use chronoscope_gesture::wheel::Modifiers;
use chronoscope_hierarchy::{CollapsedParents, EventHierarchy, Row, RowLayout, layout};
use chronoscope_time::{DataSpan, Event, EventId, Tick, TimeDomain, generate_ticks};
use chronoscope_view::{Viewport, ViewportController};
use kurbo::{Point, Vec2};

use crate::trace::{debug, log_warn};
use crate::{
    ConfigError, CreateRequest, GestureMachine, GestureOutcome, GestureState, TimelineConfig,
    TimelineHandler, create_request_at,
};

/// An interactive timeline over a set of nested events.
///
/// `Timeline` owns the events, their hierarchy and collapse state, the
/// viewport controller, and the input state machine. Hosts feed it container
/// sizes and raw input, read back rows, bars, and ticks to draw, and receive
/// notifications through `H`.
#[derive(Debug)]
pub struct Timeline<H = ()> {
    events: Vec<Event>,
    base_date: NaiveDate,
    config: TimelineConfig,
    handler: H,
    domain: TimeDomain,
    hierarchy: EventHierarchy,
    collapsed: CollapsedParents,
    view: ViewportController,
    gestures: GestureMachine,
    selected: Option<EventId>,
    pending_create: Option<CreateRequest>,
}

impl<H: TimelineHandler> Timeline<H> {
    /// Creates a timeline showing the whole padded domain of `events`.
    ///
    /// Fails only if `config` does not validate.
    pub fn new(
        events: Vec<Event>,
        base_date: NaiveDate,
        container_width: f64,
        config: TimelineConfig,
        handler: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let domain = TimeDomain::from_events(&events);
        let hierarchy = EventHierarchy::new(&events);
        let mut view = ViewportController::new(domain.padded_range(), container_width);
        view.set_zoom_step(config.zoom_step);
        view.set_min_zoom(config.min_zoom);
        let gestures = GestureMachine::new(&config);
        debug!(events = events.len(), container_width, "timeline created");
        Ok(Self {
            events,
            base_date,
            config,
            handler,
            domain,
            hierarchy,
            collapsed: CollapsedParents::new(),
            view,
            gestures,
            selected: None,
            pending_create: None,
        })
    }

    /// The events, in the order they were given.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.hierarchy.index_of(id).map(|i| &self.events[i])
    }

    /// Replaces the event set.
    ///
    /// The domain and hierarchy are rebuilt. Collapse state survives for
    /// parents that still exist, and the selection is cleared if its event is
    /// gone. Zoom and pan are kept.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.domain = TimeDomain::from_events(&self.events);
        self.hierarchy = EventHierarchy::new(&self.events);
        self.collapsed.retain_parents(&self.hierarchy);
        if self
            .selected
            .is_some_and(|id| self.hierarchy.index_of(id).is_none())
        {
            self.selected = None;
        }
        self.view.set_domain(self.domain.padded_range());
        debug!(events = self.events.len(), "events replaced");
    }

    /// Date that time unit `0` refers to.
    #[must_use]
    pub fn base_date(&self) -> NaiveDate {
        self.base_date
    }

    /// Changes the base date and notifies the handler if it differs.
    pub fn set_base_date(&mut self, base_date: NaiveDate) {
        if base_date == self.base_date {
            return;
        }
        self.base_date = base_date;
        debug!(%base_date, "base date changed");
        self.handler.on_base_date_change(base_date);
    }

    /// Container width in pixels.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.view.container_width()
    }

    /// Updates the container width (for example after a resize).
    pub fn set_container_width(&mut self, width: f64) {
        self.view.set_container_width(width);
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// The notification handler.
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the notification handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// The padded time domain of the current events.
    #[must_use]
    pub fn domain(&self) -> &TimeDomain {
        &self.domain
    }

    /// The parent/child grouping of the current events.
    #[must_use]
    pub fn hierarchy(&self) -> &EventHierarchy {
        &self.hierarchy
    }

    /// The viewport controller, for inspection.
    #[must_use]
    pub fn controller(&self) -> &ViewportController {
        &self.view
    }

    /// The window as currently drawn, including any live pan.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.view.live_viewport()
    }

    /// Which interaction currently owns input.
    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    // --- Zoom and fit ---

    /// Zooms in one step.
    ///
    /// A drag or touch sequence in progress is committed first. Ignored while
    /// a create request is open; the same holds for every other zoom and fit
    /// entry point.
    pub fn zoom_in(&mut self) {
        if !self.gestures.interrupt(&mut self.view) {
            return;
        }
        self.view.zoom_in();
        debug!(zoom = self.view.zoom_level(), "zoom in");
    }

    /// Zooms out one step.
    pub fn zoom_out(&mut self) {
        if !self.gestures.interrupt(&mut self.view) {
            return;
        }
        self.view.zoom_out();
        debug!(zoom = self.view.zoom_level(), "zoom out");
    }

    /// Shows the whole padded domain again.
    pub fn reset_view(&mut self) {
        if !self.gestures.interrupt(&mut self.view) {
            return;
        }
        self.view.reset();
        debug!("view reset");
    }

    /// Frames every timed event. Returns `false` if there are none.
    pub fn zoom_to_fit(&mut self) -> bool {
        self.fit(DataSpan::of(&self.events))
    }

    /// Frames the timed events among `ids`. Returns `false` if there are none.
    pub fn zoom_to_fit_ids(&mut self, ids: &[EventId]) -> bool {
        let span = DataSpan::of(
            ids.iter()
                .filter_map(|id| self.hierarchy.index_of(*id))
                .map(|i| &self.events[i]),
        );
        self.fit(span)
    }

    fn fit(&mut self, span: Option<DataSpan>) -> bool {
        let Some(span) = span else {
            return false;
        };
        if !self.gestures.interrupt(&mut self.view) {
            return false;
        }
        let fitted = self.view.zoom_to_fit(span.as_range(), self.config.fit_padding);
        debug!(
            min = span.min,
            max = span.max,
            zoom = self.view.zoom_level(),
            "zoom to fit"
        );
        fitted
    }

    // --- Input ---

    /// Primary pointer pressed at container position `pos`.
    pub fn pointer_down(&mut self, pos: Point) {
        self.gestures.pointer_down(&mut self.view, pos);
    }

    /// Pointer moved to container position `pos`.
    pub fn pointer_move(&mut self, pos: Point) {
        self.gestures.pointer_move(&mut self.view, pos);
    }

    /// Primary pointer released.
    pub fn pointer_up(&mut self) {
        self.gestures.pointer_up(&mut self.view);
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self) {
        self.gestures.pointer_leave(&mut self.view);
    }

    /// Double-click at container position `pos`.
    pub fn double_click(&mut self, pos: Point) {
        let outcome = self.gestures.double_click(pos);
        self.apply(outcome);
    }

    /// Wheel or trackpad scroll. Returns `true` if the timeline consumed it.
    pub fn wheel(&mut self, delta: Vec2, modifiers: Modifiers) -> bool {
        self.gestures.wheel(&mut self.view, delta, modifiers)
    }

    /// Fingers touched down. `touches` lists every finger currently down.
    pub fn touch_start(&mut self, touches: &[TouchPoint], time_ms: u64) {
        self.gestures.touch_start(&mut self.view, touches, time_ms);
    }

    /// Fingers moved. `touches` lists every finger currently down.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        self.gestures.touch_move(&mut self.view, touches);
    }

    /// Fingers lifted. `remaining` lists every finger still down.
    pub fn touch_end(&mut self, remaining: &[TouchPoint], time_ms: u64) {
        let outcome = self.gestures.touch_end(&mut self.view, remaining, time_ms);
        self.apply(outcome);
    }

    /// Abandons any gesture in progress.
    pub fn cancel_gesture(&mut self) {
        self.gestures.cancel(&mut self.view);
    }

    fn apply(&mut self, outcome: GestureOutcome) {
        let GestureOutcome::Create { pos } = outcome else {
            return;
        };
        match create_request_at(
            &self.view.live_viewport(),
            pos.x,
            self.view.container_width(),
            self.base_date,
            self.config.create_duration,
        ) {
            Ok(request) => {
                debug!(start = request.start, end = request.end, "create request");
                self.pending_create = Some(request);
                self.handler.on_create_request(&request);
            }
            Err(_) => {
                log_warn!(x = pos.x, "create request out of calendar range");
                self.gestures.finish_create();
            }
        }
    }

    // --- Create ---

    /// The open create request, if any.
    #[must_use]
    pub fn pending_create(&self) -> Option<&CreateRequest> {
        self.pending_create.as_ref()
    }

    /// Closes the open create request and resumes normal input.
    pub fn finish_create(&mut self) -> Option<CreateRequest> {
        self.gestures.finish_create();
        self.pending_create.take()
    }

    // --- Events ---

    /// The selected event.
    #[must_use]
    pub fn selected(&self) -> Option<EventId> {
        self.selected
    }

    /// Selects `id` and notifies the handler. Returns `false` for unknown ids.
    pub fn click_event(&mut self, id: EventId) -> bool {
        let Some(i) = self.hierarchy.index_of(id) else {
            return false;
        };
        self.selected = Some(id);
        self.handler.on_event_click(&self.events[i]);
        true
    }

    /// Asks the handler to edit `id`. Returns `false` for unknown ids.
    pub fn edit_event(&mut self, id: EventId) -> bool {
        let Some(i) = self.hierarchy.index_of(id) else {
            return false;
        };
        self.handler.on_event_edit(&self.events[i]);
        true
    }

    /// Asks the handler to delete `id`. Returns `false` for unknown ids.
    ///
    /// The event stays until the host calls [`Self::set_events`].
    pub fn delete_event(&mut self, id: EventId) -> bool {
        if self.hierarchy.index_of(id).is_none() {
            return false;
        }
        self.handler.on_event_delete(id);
        true
    }

    // --- Collapse ---

    /// Flips the collapse state of `id`. Returns whether it is now collapsed.
    ///
    /// Events without children cannot be collapsed.
    pub fn toggle_collapse(&mut self, id: EventId) -> bool {
        if !self.hierarchy.has_children(id) {
            return false;
        }
        self.collapsed.toggle(id)
    }

    /// Returns `true` if `id`'s subtree is hidden.
    #[must_use]
    pub fn is_collapsed(&self, id: EventId) -> bool {
        self.collapsed.is_collapsed(id)
    }

    /// Collapses every parent.
    pub fn collapse_all(&mut self) {
        self.collapsed.collapse_all(&self.hierarchy);
    }

    /// Expands every parent.
    pub fn expand_all(&mut self) {
        self.collapsed.expand_all();
    }

    // --- Projections ---

    /// Visible rows in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.hierarchy.rows(&self.collapsed)
    }

    /// Visible rows with their bars placed in the drawn window.
    #[must_use]
    pub fn layout(&self) -> Vec<RowLayout> {
        layout(
            &self.events,
            &self.rows(),
            &self.viewport(),
            self.config.min_bar_width_pct,
        )
    }

    /// Events without a start time, in input order.
    #[must_use]
    pub fn untimed(&self) -> Vec<&Event> {
        chronoscope_hierarchy::untimed(&self.events)
            .into_iter()
            .map(|i| &self.events[i])
            .collect()
    }

    /// Axis ticks for the drawn window.
    #[must_use]
    pub fn ticks(&self) -> Vec<Tick> {
        generate_ticks(
            self.viewport().as_range(),
            self.base_date,
            self.config.tick_target,
        )
    }

    /// The event whose bar lies under container x `x` in visible row `row`.
    #[must_use]
    pub fn event_at(&self, x: f64, row: usize) -> Option<EventId> {
        let pct = x / self.view.container_width().max(1.0) * 100.0;
        let layout = self.layout();
        let entry = layout.get(row)?;
        entry
            .bar
            .filter(|bar| bar.contains(pct))
            .map(|_| entry.row.id)
    }
}
