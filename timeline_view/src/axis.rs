// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::tier::ZoomTier;

/// Days in the fixed-length year used to derive pixel density.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Milliseconds per day, for converting instant differences into day offsets.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Horizontal density of `tier` in pixels per day.
#[must_use]
pub fn pixels_per_day(tier: &ZoomTier) -> f64 {
    tier.pixels_per_year / DAYS_PER_YEAR
}

/// Converts a view x-coordinate into a signed day offset from the reference instant.
#[must_use]
pub fn x_to_days(x: f64, tier: &ZoomTier, center_x: f64, offset: f64) -> f64 {
    (x - center_x - offset) / pixels_per_day(tier)
}

/// Returns the pan offset that places `days` at view x-coordinate `target_x`.
///
/// This is the inverse of [`x_to_days`] for a fixed tier: feeding the result
/// back as `offset` maps `target_x` to `days` again.
#[must_use]
pub fn days_to_offset(days: f64, tier: &ZoomTier, target_x: f64, center_x: f64) -> f64 {
    target_x - center_x - days * pixels_per_day(tier)
}

/// A horizontal time axis frozen at one tier and one pan offset.
///
/// Day `0.0` (the reference instant) maps to `center_x + offset`. Positive
/// days lie to the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeAxis {
    center_x: f64,
    offset: f64,
    pixels_per_day: f64,
}

impl TimeAxis {
    /// Creates an axis for a view of the given pixel width.
    #[must_use]
    pub fn new(width: f64, offset: f64, tier: &ZoomTier) -> Self {
        Self {
            center_x: width * 0.5,
            offset,
            pixels_per_day: pixels_per_day(tier),
        }
    }

    /// The x-coordinate of the view center.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    /// The pan offset applied at the reference instant.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Pixels per day at this axis' tier.
    #[must_use]
    pub fn pixels_per_day(&self) -> f64 {
        self.pixels_per_day
    }

    /// Converts a view x-coordinate into a day offset.
    #[must_use]
    pub fn x_to_days(&self, x: f64) -> f64 {
        (x - self.center_x - self.offset) / self.pixels_per_day
    }

    /// Converts a day offset into a view x-coordinate.
    #[must_use]
    pub fn days_to_x(&self, days: f64) -> f64 {
        self.center_x + days * self.pixels_per_day + self.offset
    }

    /// The pan offset that would put `days` at `target_x` on this tier.
    #[must_use]
    pub fn offset_placing(&self, days: f64, target_x: f64) -> f64 {
        target_x - self.center_x - days * self.pixels_per_day
    }

    /// Day range worth generating grid lines for.
    ///
    /// Spans from half a view width left of the view to half a view width
    /// past its right edge, so boundaries just outside the view are already
    /// laid out when they scroll in.
    #[must_use]
    pub fn overscan_days(&self, width: f64) -> Range<f64> {
        self.x_to_days(-width * 0.5)..self.x_to_days(width * 1.5)
    }
}
