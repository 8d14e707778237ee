// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double-tap recognition.
//!
//! A finished touch is a *tap* when it was short and never turned into a pan
//! (see [`TapRecognizer::is_tap`]). Two taps close together in both time and
//! space form a *double-tap*; a tap that does not complete a pair is
//! remembered so the next tap can be matched against it.
//!
//! ```
//! use kurbo::Point;
//! use chronoscope_gesture::tap::{Tap, TapRecognizer, TapResult};
//!
//! let mut taps = TapRecognizer::default();
//! let first = Tap::new(Point::new(100.0, 100.0), 1_000);
//! let second = Tap::new(Point::new(110.0, 95.0), 1_300);
//!
//! assert_eq!(taps.on_tap(first), TapResult::Single(first));
//! assert_eq!(taps.on_tap(second), TapResult::Double { first, second });
//! ```

use kurbo::Point;

/// Timing and distance limits for tap recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapConfig {
    /// A touch must end within this many milliseconds to count as a tap.
    pub max_tap_duration_ms: u64,
    /// Two taps must be less than this many milliseconds apart to pair.
    pub double_tap_window_ms: u64,
    /// Two taps must be less than this many pixels apart to pair.
    pub double_tap_distance: f64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            max_tap_duration_ms: 300,
            double_tap_window_ms: 500,
            double_tap_distance: 50.0,
        }
    }
}

/// A recognized tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    /// Container-relative position.
    pub pos: Point,
    /// Timestamp in milliseconds.
    pub time_ms: u64,
}

impl Tap {
    /// Creates a tap.
    #[must_use]
    pub fn new(pos: Point, time_ms: u64) -> Self {
        Self { pos, time_ms }
    }
}

/// Outcome of feeding a tap to [`TapRecognizer::on_tap`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapResult {
    /// The tap did not complete a pair; it is now remembered.
    Single(Tap),
    /// The tap completed a pair with the remembered tap.
    Double {
        /// The earlier, remembered tap.
        first: Tap,
        /// The tap that completed the pair.
        second: Tap,
    },
}

/// Pairs taps into double-taps.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapRecognizer {
    config: TapConfig,
    last: Option<Tap>,
}

impl TapRecognizer {
    /// Creates a recognizer with the given limits.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self { config, last: None }
    }

    /// Returns the limits in use.
    #[must_use]
    pub fn config(&self) -> TapConfig {
        self.config
    }

    /// Returns `true` if a touch lasting `duration_ms` that `moved` or not counts as a tap.
    #[must_use]
    pub fn is_tap(&self, duration_ms: u64, moved: bool) -> bool {
        !moved && duration_ms < self.config.max_tap_duration_ms
    }

    /// Feeds a tap.
    ///
    /// A completed pair is consumed: the next tap starts a new pair.
    pub fn on_tap(&mut self, tap: Tap) -> TapResult {
        match self.last.take() {
            Some(first) if self.pairs_with(first, tap) => TapResult::Double { first, second: tap },
            _ => {
                self.last = Some(tap);
                TapResult::Single(tap)
            }
        }
    }

    /// The remembered, unpaired tap, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Tap> {
        self.last
    }

    /// Forgets the remembered tap.
    pub fn clear(&mut self) {
        self.last = None;
    }

    fn pairs_with(&self, first: Tap, second: Tap) -> bool {
        let Some(elapsed) = second.time_ms.checked_sub(first.time_ms) else {
            return false;
        };
        elapsed < self.config.double_tap_window_ms
            && (second.pos - first.pos).hypot() < self.config.double_tap_distance
    }
}
