// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal drag tracking: per-move deltas along the time axis.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] on pointer-down (or single-finger touch start).
//! 2) On each move, call [`DragState::update`]; add the returned delta to the pan target.
//! 3) Call [`DragState::end`] on pointer-up, pointer-leave, or touch end.
//!
//! Only the x-coordinate matters: dragging pans, it never reorders items.

/// Tracks an in-progress horizontal drag.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    last_x: Option<f64>,
}

impl DragState {
    /// Begins a drag at `x`, replacing any drag already in progress.
    pub fn start(&mut self, x: f64) {
        self.last_x = Some(x);
    }

    /// Records a move to `x` and returns the distance moved since the last call.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, x: f64) -> Option<f64> {
        let last = self.last_x.as_mut()?;
        let delta = x - *last;
        *last = x;
        Some(delta)
    }

    /// Ends the drag and forgets its position.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_x.is_some()
    }
}
