// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The input state machine.
//!
//! Raw pointer, wheel, and touch input is routed through [`GestureMachine`],
//! which decides which recognizer owns it and applies the result to a
//! [`ViewportController`].
//!
//! # States
//!
//! - `Idle`: nothing in progress.
//! - `Dragging`: a pointer drag is previewing a pan.
//! - `Touching`: a touch sequence (pan, pinch, or tap) is in progress.
//! - `CreatingEvent`: a create request is open. Every input is ignored until
//!   [`GestureMachine::finish_create`].
//!
//! # Invariants
//!
//! 1. Only one modality owns input at a time: pointer input is ignored while
//!    touching, and touch input is ignored while dragging.
//! 2. Wheel input is only applied while idle, so a wheel event can never
//!    commit somebody else's live pan.
//! 3. Every path out of `Dragging` and `Touching` commits the live pan, so the
//!    controller never stays suspended.
//! 4. Programmatic navigation first calls [`GestureMachine::interrupt`], so a
//!    drag still in flight cannot commit over a zoom or fit afterwards.

use chronoscope_gesture::drag::DragState;
use chronoscope_gesture::tap::{Tap, TapRecognizer, TapResult};
use chronoscope_gesture::touch::{TouchEnd, TouchPoint, TouchStart, TouchTracker, TouchUpdate};
use chronoscope_gesture::wheel::{Modifiers, WheelAction, WheelConfig, classify_wheel};
use chronoscope_view::ViewportController;
use kurbo::{Point, Vec2};

use crate::TimelineConfig;
use crate::trace::{debug, trace};

/// Which interaction currently owns input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// Nothing in progress.
    #[default]
    Idle,
    /// A pointer drag is in progress.
    Dragging,
    /// A touch sequence is in progress.
    Touching,
    /// A create request is open.
    CreatingEvent,
}

/// Something the caller has to act on after feeding input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Nothing beyond viewport changes.
    None,
    /// The user asked to create an event at container position `pos`.
    ///
    /// The machine is now in [`GestureState::CreatingEvent`].
    Create {
        /// Container-relative position the request is anchored at.
        pos: Point,
    },
}

/// Routes input to the recognizers and applies it to a viewport controller.
#[derive(Clone, Debug, Default)]
pub struct GestureMachine {
    state: GestureState,
    drag: DragState,
    touch: TouchTracker,
    taps: TapRecognizer,
    wheel: WheelConfig,
}

impl GestureMachine {
    /// Creates an idle machine using the recognizer settings in `config`.
    #[must_use]
    pub fn new(config: &TimelineConfig) -> Self {
        Self {
            state: GestureState::Idle,
            drag: DragState::default(),
            touch: TouchTracker::new(config.touch()),
            taps: TapRecognizer::new(config.tap()),
            wheel: config.wheel(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `true` while a create request is open.
    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.state == GestureState::CreatingEvent
    }

    /// Starts a pointer drag at `pos`.
    pub fn pointer_down(&mut self, view: &mut ViewportController, pos: Point) {
        if self.state != GestureState::Idle {
            return;
        }
        self.drag.start(pos, view.pan_offset());
        view.begin_pan();
        self.transition(GestureState::Dragging);
    }

    /// Updates the live pan of a pointer drag.
    ///
    /// Pointer travel is scaled by `1 / zoom_level`.
    pub fn pointer_move(&mut self, view: &mut ViewportController, pos: Point) {
        if self.state != GestureState::Dragging {
            return;
        }
        let sensitivity = 1.0 / view.zoom_level();
        if let Some(offset) = self.drag.pan_offset(pos, sensitivity) {
            trace!(offset, "drag pan");
            view.set_pan_offset(offset);
        }
    }

    /// Ends a pointer drag, committing its pan.
    pub fn pointer_up(&mut self, view: &mut ViewportController) {
        if self.state != GestureState::Dragging {
            return;
        }
        self.drag.end();
        view.commit_pan();
        self.transition(GestureState::Idle);
    }

    /// The pointer left the container. Behaves like [`Self::pointer_up`].
    pub fn pointer_leave(&mut self, view: &mut ViewportController) {
        self.pointer_up(view);
    }

    /// A double-click at `pos` (mouse input). Opens a create request when idle.
    pub fn double_click(&mut self, pos: Point) -> GestureOutcome {
        if self.state != GestureState::Idle {
            return GestureOutcome::None;
        }
        self.begin_create(pos)
    }

    /// Applies a wheel event. Returns `true` if the timeline consumed it.
    ///
    /// Unconsumed events (plain vertical scrolling) should be left to the host.
    pub fn wheel(
        &mut self,
        view: &mut ViewportController,
        delta: Vec2,
        modifiers: Modifiers,
    ) -> bool {
        if self.state != GestureState::Idle {
            return false;
        }
        match classify_wheel(delta, modifiers, &self.wheel) {
            WheelAction::Zoom { factor } => {
                view.zoom_by(factor);
                debug!(factor, zoom = view.zoom_level(), "wheel zoom");
                true
            }
            WheelAction::Pan { delta } => {
                let sensitivity = 1.0 / view.zoom_level();
                view.pan_by_view(-delta * sensitivity);
                trace!(delta, "wheel pan");
                true
            }
            WheelAction::Ignore => false,
        }
    }

    /// Touches began. `touches` is every finger currently down.
    pub fn touch_start(
        &mut self,
        view: &mut ViewportController,
        touches: &[TouchPoint],
        time_ms: u64,
    ) {
        if !matches!(self.state, GestureState::Idle | GestureState::Touching) {
            return;
        }
        match self
            .touch
            .touch_start(touches, time_ms, view.zoom_level(), view.pan_offset())
        {
            TouchStart::Single => {
                view.begin_pan();
                self.transition(GestureState::Touching);
            }
            TouchStart::Pinch { .. } => {
                // Zoom changes must recompute the window, which a live pan suspends.
                view.commit_pan();
                self.transition(GestureState::Touching);
            }
            TouchStart::Ignored => {}
        }
    }

    /// Touches moved. `touches` is every finger currently down.
    pub fn touch_move(&mut self, view: &mut ViewportController, touches: &[TouchPoint]) {
        if self.state != GestureState::Touching {
            return;
        }
        match self.touch.touch_move(touches) {
            TouchUpdate::Pan { pan_offset } => view.set_pan_offset(pan_offset),
            TouchUpdate::Pinch { zoom_level, .. } => {
                view.set_zoom(zoom_level);
                trace!(zoom_level, "pinch zoom");
            }
            TouchUpdate::None => {}
        }
    }

    /// Touches ended. `remaining` is every finger still down.
    ///
    /// A touch end that does not belong to a known sequence just resets the
    /// touch state.
    pub fn touch_end(
        &mut self,
        view: &mut ViewportController,
        remaining: &[TouchPoint],
        time_ms: u64,
    ) -> GestureOutcome {
        match self.state {
            GestureState::Touching => {}
            GestureState::CreatingEvent => return GestureOutcome::None,
            GestureState::Idle | GestureState::Dragging => {
                self.touch.reset();
                return GestureOutcome::None;
            }
        }
        match self
            .touch
            .touch_end(remaining, time_ms, view.zoom_level(), view.pan_offset())
        {
            TouchEnd::Continuing => GestureOutcome::None,
            TouchEnd::PinchEnded => {
                view.begin_pan();
                GestureOutcome::None
            }
            TouchEnd::Tap { pos, time_ms } => {
                self.end_touch(view);
                match self.taps.on_tap(Tap::new(pos, time_ms)) {
                    TapResult::Double { first, .. } => self.begin_create(first.pos),
                    TapResult::Single(_) => GestureOutcome::None,
                }
            }
            TouchEnd::PanEnded | TouchEnd::Ended | TouchEnd::Ignored => {
                self.end_touch(view);
                GestureOutcome::None
            }
        }
    }

    /// Closes an open create request.
    pub fn finish_create(&mut self) {
        if self.state == GestureState::CreatingEvent {
            self.transition(GestureState::Idle);
        }
    }

    /// Abandons whatever is in progress, committing any live pan.
    pub fn cancel(&mut self, view: &mut ViewportController) {
        self.drag.end();
        self.touch.reset();
        self.taps.clear();
        if view.is_panning() {
            view.commit_pan();
        }
        self.transition(GestureState::Idle);
    }

    /// Ends a drag or touch sequence in progress, committing its live pan.
    ///
    /// Returns `false` if a create request is open; the caller should then
    /// leave the window alone. Later pointer or touch input belonging to the
    /// interrupted gesture is ignored until a new one starts.
    pub fn interrupt(&mut self, view: &mut ViewportController) -> bool {
        match self.state {
            GestureState::CreatingEvent => return false,
            GestureState::Idle => return true,
            GestureState::Dragging | GestureState::Touching => {}
        }
        self.drag.end();
        self.touch.reset();
        view.commit_pan();
        self.transition(GestureState::Idle);
        true
    }

    fn end_touch(&mut self, view: &mut ViewportController) {
        view.commit_pan();
        self.transition(GestureState::Idle);
    }

    fn begin_create(&mut self, pos: Point) -> GestureOutcome {
        self.transition(GestureState::CreatingEvent);
        GestureOutcome::Create { pos }
    }

    fn transition(&mut self, next: GestureState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "gesture state");
            self.state = next;
        }
    }
}
