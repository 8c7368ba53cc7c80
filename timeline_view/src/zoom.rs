// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::axis::TimeAxis;
use crate::tier::ZoomTier;

/// Direction of a discrete zoom request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Move to the next finer tier.
    In,
    /// Move to the next coarser tier.
    Out,
}

/// Result of a successful tier transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomStep {
    /// Tier index before the transition.
    pub from: usize,
    /// Tier index after the transition.
    pub to: usize,
    /// View x-coordinate that was held fixed.
    pub focal_x: f64,
    /// Day offset under `focal_x`, identical before and after.
    pub days: f64,
    /// Pan offset that keeps `days` under `focal_x` on the new tier.
    pub offset: f64,
}

/// Discrete zoom state: a fixed ladder of tiers and the current rung.
///
/// The ladder starts on tier `0` (the coarsest). Transitions move one rung at
/// a time and are silent no-ops at either end.
#[derive(Clone, Debug)]
pub struct ZoomLadder {
    tiers: Vec<ZoomTier>,
    index: usize,
}

impl ZoomLadder {
    /// Creates a ladder positioned on its first tier.
    ///
    /// # Panics
    ///
    /// Panics if `tiers` is empty.
    #[must_use]
    pub fn new(tiers: Vec<ZoomTier>) -> Self {
        assert!(!tiers.is_empty(), "a zoom ladder needs at least one tier");
        Self { tiers, index: 0 }
    }

    /// All tiers, coarsest first.
    #[must_use]
    pub fn tiers(&self) -> &[ZoomTier] {
        &self.tiers
    }

    /// Index of the current tier.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The current tier.
    #[must_use]
    pub fn current(&self) -> &ZoomTier {
        &self.tiers[self.index]
    }

    /// Returns `true` when no finer tier exists.
    #[must_use]
    pub fn is_finest(&self) -> bool {
        self.index + 1 >= self.tiers.len()
    }

    /// Returns `true` when no coarser tier exists.
    #[must_use]
    pub fn is_coarsest(&self) -> bool {
        self.index == 0
    }

    /// Steps one tier finer, keeping the instant under `focal_x` in place.
    ///
    /// `width` is the view width and `offset` the pan offset in effect before
    /// the step. Returns `None` without changing state at the finest tier.
    pub fn zoom_in(&mut self, focal_x: f64, width: f64, offset: f64) -> Option<ZoomStep> {
        self.zoom(ZoomDirection::In, focal_x, width, offset)
    }

    /// Steps one tier coarser, keeping the instant under `focal_x` in place.
    ///
    /// Returns `None` without changing state at the coarsest tier.
    pub fn zoom_out(&mut self, focal_x: f64, width: f64, offset: f64) -> Option<ZoomStep> {
        self.zoom(ZoomDirection::Out, focal_x, width, offset)
    }

    /// Steps one tier in `direction`; see [`ZoomLadder::zoom_in`].
    pub fn zoom(
        &mut self,
        direction: ZoomDirection,
        focal_x: f64,
        width: f64,
        offset: f64,
    ) -> Option<ZoomStep> {
        let from = self.index;
        let to = match direction {
            ZoomDirection::In if !self.is_finest() => from + 1,
            ZoomDirection::Out if !self.is_coarsest() => from - 1,
            _ => return None,
        };

        let days = TimeAxis::new(width, offset, &self.tiers[from]).x_to_days(focal_x);
        self.index = to;
        let offset = TimeAxis::new(width, offset, &self.tiers[to]).offset_placing(days, focal_x);

        Some(ZoomStep {
            from,
            to,
            focal_x,
            days,
            offset,
        })
    }
}
