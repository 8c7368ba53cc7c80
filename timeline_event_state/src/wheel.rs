// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced wheel zoom.
//!
//! Wheels and trackpads deliver a near-continuous stream of small deltas,
//! while the timeline only has a handful of zoom tiers. [`WheelZoom`] counts
//! wheel ticks and releases a single zoom step every `threshold` ticks, in the
//! direction of the tick that crossed the threshold (negative `delta_y` zooms
//! in, positive zooms out). The counter resets whenever the threshold is
//! reached, even if that last tick had a zero delta.

use timeline_view::ZoomDirection;

/// Counts wheel ticks and emits one zoom step per `threshold` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelZoom {
    threshold: u32,
    pending: u32,
}

impl WheelZoom {
    /// Creates a debouncer that fires every `threshold` ticks.
    ///
    /// A threshold of `0` behaves like `1`: every tick zooms.
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            pending: 0,
        }
    }

    /// Registers one wheel tick.
    ///
    /// Returns the zoom direction when this tick reaches the threshold.
    pub fn tick(&mut self, delta_y: f64) -> Option<ZoomDirection> {
        self.pending += 1;
        if self.pending < self.threshold {
            return None;
        }
        self.pending = 0;
        if delta_y < 0.0 {
            Some(ZoomDirection::In)
        } else if delta_y > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }

    /// Ticks counted since the last release.
    #[must_use]
    pub fn pending(&self) -> u32 {
        self.pending
    }

    /// The configured threshold.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
