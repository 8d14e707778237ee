// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel and trackpad classification.
//!
//! Every wheel event maps to exactly one [`WheelAction`]. The branches are
//! tested in order:
//!
//! 1. Ctrl or Meta held: zoom. Trackpad pinch gestures arrive this way too.
//!    The sign is inverted, so scrolling up (negative `y`) zooms in.
//! 2. Mostly horizontal movement (`|x| > |y|`): pan.
//! 3. Shift held with vertical movement: zoom, using its own sensitivity.
//!
//! Anything else is left to the host (usually page scrolling).
//!
//! Each event is classified from its own delta only; nothing is accumulated,
//! so bursts of events cannot drift.
//!
//! Zoom factors are `1 - y * sensitivity`, floored at [`MIN_ZOOM_FACTOR`]. A
//! large downward delta therefore still zooms out instead of producing a
//! factor the controller would have to reject.

use bitflags::bitflags;
use kurbo::Vec2;

bitflags! {
    /// Keyboard modifiers held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CTRL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command.
        const META = 1 << 3;
    }
}

/// Smallest zoom factor a single wheel event can produce.
pub const MIN_ZOOM_FACTOR: f64 = 0.1;

/// Sensitivities applied to wheel deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Zoom change per delta unit with Ctrl/Meta held.
    pub zoom_sensitivity: f64,
    /// Zoom change per delta unit with Shift held.
    pub shift_zoom_sensitivity: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            zoom_sensitivity: 0.002,
            shift_zoom_sensitivity: 0.002,
        }
    }
}

/// What a wheel event asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    /// Multiply the zoom level by `factor`.
    Zoom {
        /// Multiplicative zoom change.
        factor: f64,
    },
    /// Pan horizontally by `delta` pixels (positive scrolls toward later times).
    Pan {
        /// Raw horizontal delta.
        delta: f64,
    },
    /// Not a timeline gesture.
    Ignore,
}

/// Classifies a wheel event with scroll `delta` and the held `modifiers`.
#[must_use]
pub fn classify_wheel(delta: Vec2, modifiers: Modifiers, config: &WheelConfig) -> WheelAction {
    if modifiers.intersects(Modifiers::CTRL | Modifiers::META) {
        if delta.y == 0.0 {
            return WheelAction::Ignore;
        }
        return WheelAction::Zoom {
            factor: zoom_factor(delta.y, config.zoom_sensitivity),
        };
    }
    if delta.x.abs() > delta.y.abs() {
        return WheelAction::Pan { delta: delta.x };
    }
    if modifiers.contains(Modifiers::SHIFT) && delta.y != 0.0 {
        return WheelAction::Zoom {
            factor: zoom_factor(delta.y, config.shift_zoom_sensitivity),
        };
    }
    WheelAction::Ignore
}

fn zoom_factor(dy: f64, sensitivity: f64) -> f64 {
    (1.0 - dy * sensitivity).max(MIN_ZOOM_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: WheelConfig = WheelConfig {
        zoom_sensitivity: 0.01,
        shift_zoom_sensitivity: 0.005,
    };

    fn assert_zoom(action: WheelAction, expected: f64) {
        match action {
            WheelAction::Zoom { factor } => assert!(
                (factor - expected).abs() < 1e-12,
                "expected factor {expected}, got {factor}"
            ),
            other => panic!("expected zoom, got {other:?}"),
        }
    }

    #[test]
    fn ctrl_scroll_up_zooms_in() {
        let action = classify_wheel(Vec2::new(0.0, -10.0), Modifiers::CTRL, &CONFIG);
        assert_zoom(action, 1.1);
    }

    #[test]
    fn meta_scroll_down_zooms_out() {
        let action = classify_wheel(Vec2::new(0.0, 10.0), Modifiers::META, &CONFIG);
        assert_zoom(action, 0.9);
    }

    #[test]
    fn ctrl_takes_precedence_over_horizontal_pan() {
        let action = classify_wheel(Vec2::new(50.0, -1.0), Modifiers::CTRL, &CONFIG);
        assert!(matches!(action, WheelAction::Zoom { .. }));
    }

    #[test]
    fn large_scroll_down_still_zooms_out() {
        // 1 - 120 * 0.01 would be negative.
        let action = classify_wheel(Vec2::new(0.0, 120.0), Modifiers::CTRL, &CONFIG);
        assert_zoom(action, MIN_ZOOM_FACTOR);
        let action = classify_wheel(Vec2::new(0.0, 1000.0), Modifiers::SHIFT, &CONFIG);
        assert_zoom(action, MIN_ZOOM_FACTOR);
    }

    #[test]
    fn horizontal_delta_pans() {
        let action = classify_wheel(Vec2::new(-30.0, 4.0), Modifiers::empty(), &CONFIG);
        assert_eq!(action, WheelAction::Pan { delta: -30.0 });
    }

    #[test]
    fn shift_vertical_uses_shift_sensitivity() {
        let action = classify_wheel(Vec2::new(0.0, -20.0), Modifiers::SHIFT, &CONFIG);
        assert_zoom(action, 1.1);
    }

    #[test]
    fn plain_vertical_scroll_is_ignored() {
        let action = classify_wheel(Vec2::new(0.0, 40.0), Modifiers::empty(), &CONFIG);
        assert_eq!(action, WheelAction::Ignore);
        let action = classify_wheel(Vec2::ZERO, Modifiers::CTRL, &CONFIG);
        assert_eq!(action, WheelAction::Ignore);
    }
}
