// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag tracking for timeline panning.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`DragState::start`] with the pointer position and
//!    the pan offset in effect at that moment.
//! 2) On each move, call [`DragState::pan_offset`] with the new position and
//!    the pan sensitivity (typically `1 / zoom_level`) to get the live offset.
//! 3) On pointer up or leave, commit the offset and call [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use chronoscope_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Press at x = 100 with no pending pan.
//! drag.start(Point::new(100.0, 40.0), 0.0);
//! assert!(drag.is_dragging());
//!
//! // Move 60px right at zoom 2: the offset grows by 60 / 2.
//! let offset = drag.pan_offset(Point::new(160.0, 45.0), 0.5).unwrap();
//! assert_eq!(offset, 30.0);
//! ```

use kurbo::Point;

/// Tracks an in-progress pointer drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position where the pointer went down.
    pub start_pos: Option<Point>,
    /// Pan offset (pixels) at the time the drag started.
    pub start_pan: f64,
}

impl DragState {
    /// Starts tracking a drag at `pos`, remembering the current pan offset.
    pub fn start(&mut self, pos: Point, pan_offset: f64) {
        self.start_pos = Some(pos);
        self.start_pan = pan_offset;
    }

    /// Pan offset for the pointer at `pos`.
    ///
    /// The horizontal travel since the start is scaled by `sensitivity` and
    /// added to the pan offset captured at [`DragState::start`]. Vertical
    /// movement is ignored.
    pub fn pan_offset(&self, pos: Point, sensitivity: f64) -> Option<f64> {
        self.start_pos
            .map(|start| self.start_pan + (pos.x - start.x) * sensitivity)
    }

    /// Ends the drag and clears all state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
