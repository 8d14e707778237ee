// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-touch tracking: one-finger pan, two-finger pinch, and tap candidates.
//!
//! [`TouchTracker`] is fed the full list of active touches on every touch
//! start, move, and end, the way platform touch events report them. It keeps
//! just enough state to turn those snapshots into pan offsets and zoom levels:
//!
//! - One finger down starts a tap candidate. Once it moves further than
//!   [`TouchConfig::pan_threshold`] it becomes a pan, and is no longer a tap.
//! - Two fingers down start a pinch. Zoom follows the ratio of the current
//!   finger distance to the initial one; the pan offset is held at its
//!   initial value.
//! - When the last finger lifts, the tracker reports whether the sequence was
//!   a pan, a tap candidate, or neither, and resets.
//!
//! Pan and zoom values are computed from the state captured at the start of
//! the gesture, not accumulated per event.
//!
//! ```
//! use kurbo::Point;
//! use chronoscope_gesture::touch::{TouchConfig, TouchEnd, TouchPoint, TouchTracker, TouchUpdate};
//!
//! let mut touch = TouchTracker::new(TouchConfig::default());
//! touch.touch_start(&[TouchPoint::new(0, Point::new(100.0, 50.0))], 0, 2.0, 0.0);
//!
//! // 40px to the right at zoom 2.0 pans by 20px.
//! let update = touch.touch_move(&[TouchPoint::new(0, Point::new(140.0, 50.0))]);
//! assert_eq!(update, TouchUpdate::Pan { pan_offset: 20.0 });
//!
//! assert_eq!(touch.touch_end(&[], 400, 2.0, 20.0), TouchEnd::PanEnded);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Smallest finger distance used as a pinch divisor.
const MIN_PINCH_DISTANCE: f64 = 1.0;

/// Thresholds for touch classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchConfig {
    /// Movement (pixels) after which a one-finger touch becomes a pan.
    pub pan_threshold: f64,
    /// Maximum duration (milliseconds) of a touch that can still be a tap.
    pub max_tap_duration_ms: u64,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            pan_threshold: 10.0,
            max_tap_duration_ms: 300,
        }
    }
}

/// One active touch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Platform touch identifier.
    pub id: u64,
    /// Container-relative position.
    pub pos: Point,
}

impl TouchPoint {
    /// Creates a touch point.
    #[must_use]
    pub fn new(id: u64, pos: Point) -> Self {
        Self { id, pos }
    }
}

/// What a touch start began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchStart {
    /// A one-finger touch (tap candidate or future pan).
    Single,
    /// A two-finger pinch.
    Pinch {
        /// `true` if a one-finger pan was live and should be committed first.
        ended_pan: bool,
    },
    /// No touches were supplied.
    Ignored,
}

/// What a touch move asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchUpdate {
    /// Nothing to apply (below the pan threshold, or no active gesture).
    None,
    /// Set the live pan offset.
    Pan {
        /// Pan offset in pixels.
        pan_offset: f64,
    },
    /// Set zoom and pan from the pinch.
    Pinch {
        /// Target zoom level.
        zoom_level: f64,
        /// Pan offset to keep.
        pan_offset: f64,
    },
}

/// How a touch sequence (or part of it) ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchEnd {
    /// Fingers remain down; the sequence continues.
    Continuing,
    /// A pinch ended with one finger remaining, which may now pan.
    PinchEnded,
    /// The last finger lifted after a pan; the pan should be committed.
    PanEnded,
    /// The last finger lifted quickly without panning.
    Tap {
        /// Where the touch started.
        pos: Point,
        /// When the touch ended (milliseconds).
        time_ms: u64,
    },
    /// The last finger lifted; nothing to do.
    Ended,
    /// There was no matching touch start; state was reset.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pinch {
    initial_distance: f64,
    initial_zoom: f64,
    initial_pan: f64,
}

/// Tracks one touch sequence from first finger down to last finger up.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    config: TouchConfig,
    touches: SmallVec<[TouchPoint; 4]>,
    start_time_ms: Option<u64>,
    start_pos: Point,
    start_zoom: f64,
    start_pan: f64,
    panning: bool,
    tap_eligible: bool,
    pinch: Option<Pinch>,
}

impl TouchTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new(config: TouchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> TouchConfig {
        self.config
    }

    /// Returns `true` while a touch sequence is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_time_ms.is_some()
    }

    /// Returns `true` once the one-finger touch has become a pan.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Currently tracked touches.
    #[must_use]
    pub fn touches(&self) -> &[TouchPoint] {
        &self.touches
    }

    /// Handles touch start. `touches` is the full list of active touches.
    ///
    /// `zoom_level` and `pan_offset` are the viewport values at this moment;
    /// later pan and pinch values are derived from them.
    pub fn touch_start(
        &mut self,
        touches: &[TouchPoint],
        time_ms: u64,
        zoom_level: f64,
        pan_offset: f64,
    ) -> TouchStart {
        let Some(first) = touches.first() else {
            return TouchStart::Ignored;
        };
        self.touches = touches.iter().copied().collect();

        if let [a, b, ..] = touches {
            let ended_pan = self.panning;
            self.start_time_ms.get_or_insert(time_ms);
            self.panning = false;
            self.tap_eligible = false;
            self.pinch = Some(Pinch {
                initial_distance: distance(a.pos, b.pos),
                initial_zoom: zoom_level,
                initial_pan: pan_offset,
            });
            return TouchStart::Pinch { ended_pan };
        }

        self.start_time_ms = Some(time_ms);
        self.anchor(first.pos, zoom_level, pan_offset);
        self.tap_eligible = true;
        self.pinch = None;
        TouchStart::Single
    }

    /// Handles touch move. `touches` is the full list of active touches.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> TouchUpdate {
        if !self.is_active() {
            return TouchUpdate::None;
        }
        self.touches = touches.iter().copied().collect();

        if let (Some(pinch), [a, b, ..]) = (self.pinch, touches) {
            let scale = distance(a.pos, b.pos) / pinch.initial_distance;
            return TouchUpdate::Pinch {
                zoom_level: pinch.initial_zoom * scale,
                pan_offset: pinch.initial_pan,
            };
        }

        let ([finger], None) = (touches, self.pinch) else {
            return TouchUpdate::None;
        };
        let travel = finger.pos - self.start_pos;
        if !self.panning && travel.hypot() > self.config.pan_threshold {
            self.panning = true;
            self.tap_eligible = false;
        }
        if !self.panning {
            return TouchUpdate::None;
        }
        TouchUpdate::Pan {
            pan_offset: self.start_pan + travel.x / self.start_zoom,
        }
    }

    /// Handles touch end. `remaining` is the list of touches still down.
    ///
    /// `zoom_level` and `pan_offset` are the current viewport values, used to
    /// re-anchor a finger that stays down after a pinch.
    pub fn touch_end(
        &mut self,
        remaining: &[TouchPoint],
        time_ms: u64,
        zoom_level: f64,
        pan_offset: f64,
    ) -> TouchEnd {
        let Some(start_time_ms) = self.start_time_ms else {
            self.reset();
            return TouchEnd::Ignored;
        };
        self.touches = remaining.iter().copied().collect();

        if let Some(finger) = remaining.first() {
            if self.pinch.is_some() && remaining.len() < 2 {
                self.pinch = None;
                self.anchor(finger.pos, zoom_level, pan_offset);
                return TouchEnd::PinchEnded;
            }
            return TouchEnd::Continuing;
        }

        let duration = time_ms.saturating_sub(start_time_ms);
        let outcome = if self.panning {
            TouchEnd::PanEnded
        } else if self.tap_eligible && duration < self.config.max_tap_duration_ms {
            TouchEnd::Tap {
                pos: self.start_pos,
                time_ms,
            }
        } else {
            TouchEnd::Ended
        };
        self.reset();
        outcome
    }

    /// Drops any in-progress sequence.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    fn anchor(&mut self, pos: Point, zoom_level: f64, pan_offset: f64) {
        self.start_pos = pos;
        self.start_zoom = zoom_level.max(f64::MIN_POSITIVE);
        self.start_pan = pan_offset;
        self.panning = false;
    }
}

fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot().max(MIN_PINCH_DISTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(x: f64, y: f64) -> [TouchPoint; 1] {
        [TouchPoint::new(1, Point::new(x, y))]
    }

    fn two(ax: f64, bx: f64) -> [TouchPoint; 2] {
        [
            TouchPoint::new(1, Point::new(ax, 0.0)),
            TouchPoint::new(2, Point::new(bx, 0.0)),
        ]
    }

    #[test]
    fn small_movement_stays_a_tap() {
        let mut touch = TouchTracker::new(TouchConfig::default());
        assert_eq!(touch.touch_start(&one(50.0, 50.0), 0, 1.0, 0.0), TouchStart::Single);
        assert_eq!(touch.touch_move(&one(56.0, 56.0)), TouchUpdate::None);
        assert_eq!(
            touch.touch_end(&[], 120, 1.0, 0.0),
            TouchEnd::Tap {
                pos: Point::new(50.0, 50.0),
                time_ms: 120
            }
        );
        assert!(!touch.is_active());
    }

    #[test]
    fn long_press_is_not_a_tap() {
        let mut touch = TouchTracker::new(TouchConfig::default());
        touch.touch_start(&one(50.0, 50.0), 0, 1.0, 0.0);
        assert_eq!(touch.touch_end(&[], 300, 1.0, 0.0), TouchEnd::Ended);
    }

    #[test]
    fn crossing_threshold_becomes_a_pan() {
        let mut touch = TouchTracker::new(TouchConfig::default());
        touch.touch_start(&one(100.0, 0.0), 0, 4.0, 8.0);
        assert_eq!(
            touch.touch_move(&one(112.0, 0.0)),
            TouchUpdate::Pan { pan_offset: 11.0 }
        );
        assert!(touch.is_panning());
        // Coming back under the threshold does not revert to a tap.
        assert_eq!(
            touch.touch_move(&one(104.0, 0.0)),
            TouchUpdate::Pan { pan_offset: 9.0 }
        );
        assert_eq!(touch.touch_end(&[], 100, 4.0, 9.0), TouchEnd::PanEnded);
    }

    #[test]
    fn pinch_scales_zoom_and_keeps_pan() {
        let mut touch = TouchTracker::new(TouchConfig::default());
        touch.touch_start(&one(100.0, 0.0), 0, 2.0, 0.0);
        assert_eq!(
            touch.touch_start(&two(100.0, 200.0), 10, 2.0, 5.0),
            TouchStart::Pinch { ended_pan: false }
        );
        assert_eq!(
            touch.touch_move(&two(50.0, 250.0)),
            TouchUpdate::Pinch {
                zoom_level: 4.0,
                pan_offset: 5.0
            }
        );
        assert!(touch.is_pinching());
    }

    #[test]
    fn pinch_after_pan_reports_pan_to_commit() {
        let mut touch = TouchTracker::new(TouchConfig::default());
        touch.touch_start(&one(0.0, 0.0), 0, 1.0, 0.0);
        touch.touch_move(&one(30.0, 0.0));
        assert_eq!(
            touch.touch_start(&two(30.0, 90.0), 50, 1.0, 0.0),
            TouchStart::Pinch { ended_pan: true }
        );
        assert!(!touch.is_panning());
    }

    #[test]
    fn lifting_one_pinch_finger_reanchors_the_other() {
        let mut touch = TouchTracker::new(TouchConfig::default());
        touch.touch_start(&two(0.0, 100.0), 0, 1.0, 0.0);
        touch.touch_move(&two(0.0, 200.0));
        assert_eq!(
            touch.touch_end(&one(0.0, 0.0), 80, 2.0, 0.0),
            TouchEnd::PinchEnded
        );
        // The remaining finger pans relative to where it was, at the new zoom.
        assert_eq!(
            touch.touch_move(&one(40.0, 0.0)),
            TouchUpdate::Pan { pan_offset: 20.0 }
        );
        // Pinch sequences never produce taps.
        assert_eq!(touch.touch_end(&[], 100, 2.0, 20.0), TouchEnd::PanEnded);
    }

    #[test]
    fn pinch_release_without_pan_is_not_a_tap() {
        let mut touch = TouchTracker::new(TouchConfig::default());
        touch.touch_start(&two(0.0, 100.0), 0, 1.0, 0.0);
        assert_eq!(touch.touch_end(&one(0.0, 0.0), 20, 1.0, 0.0), TouchEnd::PinchEnded);
        assert_eq!(touch.touch_end(&[], 40, 1.0, 0.0), TouchEnd::Ended);
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut touch = TouchTracker::new(TouchConfig::default());
        assert_eq!(touch.touch_end(&[], 10, 1.0, 0.0), TouchEnd::Ignored);
        assert_eq!(touch.touch_move(&one(5.0, 5.0)), TouchUpdate::None);
        assert!(!touch.is_active());
    }

    #[test]
    fn coincident_pinch_fingers_do_not_divide_by_zero() {
        let mut touch = TouchTracker::new(TouchConfig::default());
        touch.touch_start(&two(10.0, 10.0), 0, 1.0, 0.0);
        match touch.touch_move(&two(10.0, 20.0)) {
            TouchUpdate::Pinch { zoom_level, .. } => assert!(zoom_level.is_finite()),
            other => panic!("expected pinch, got {other:?}"),
        }
    }
}
