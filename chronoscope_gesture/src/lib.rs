// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chronoscope Gesture: input recognizers for timeline navigation.
//!
//! This crate provides small, focused recognizers for the input a timeline has
//! to reconcile. Each module handles one modality:
//!
//! - [`drag`]: Pointer drags turned into live pan offsets
//! - [`wheel`]: Wheel/trackpad events classified into zoom, pan, or nothing
//! - [`touch`]: One-finger pan and two-finger pinch from touch snapshots
//! - [`tap`]: Tap and double-tap pairing
//!
//! ## Design Philosophy
//!
//! Each recognizer is:
//!
//! - **Minimal and focused**: one interaction pattern per type
//! - **Stateful but simple**: just enough state to compute the next result
//! - **Viewport-agnostic**: results are pan offsets, zoom levels, and factors;
//!   applying them is up to the caller
//!
//! Deciding which recognizer owns the input at a given moment (a drag versus a
//! touch sequence versus an open create form) is a state machine that lives a
//! layer up, in the `chronoscope` facade.
//!
//! ## Usage Patterns
//!
//! ### Pointer drag
//!
//! ```rust
//! use kurbo::Point;
//! use chronoscope_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 10.0), 0.0);
//!
//! // At zoom 1.0 the pan offset follows the pointer one to one.
//! assert_eq!(drag.pan_offset(Point::new(35.0, 12.0), 1.0), Some(25.0));
//! drag.end();
//! ```
//!
//! ### Wheel classification
//!
//! ```rust
//! use kurbo::Vec2;
//! use chronoscope_gesture::wheel::{Modifiers, WheelAction, WheelConfig, classify_wheel};
//!
//! let config = WheelConfig::default();
//! let action = classify_wheel(Vec2::new(0.0, -50.0), Modifiers::CTRL, &config);
//! assert!(matches!(action, WheelAction::Zoom { factor } if factor > 1.0));
//! ```
//!
//! ### Double-tap
//!
//! ```rust
//! use kurbo::Point;
//! use chronoscope_gesture::tap::{Tap, TapRecognizer, TapResult};
//!
//! let mut taps = TapRecognizer::default();
//! taps.on_tap(Tap::new(Point::new(10.0, 10.0), 0));
//! let result = taps.on_tap(Tap::new(Point::new(12.0, 11.0), 200));
//! assert!(matches!(result, TapResult::Double { .. }));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod drag;
pub mod tap;
pub mod touch;
pub mod wheel;
