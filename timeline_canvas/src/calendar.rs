// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar arithmetic against the reference instant.
//!
//! The horizontal axis is measured in fractional days from a fixed reference
//! instant captured when the timeline is built. Calendar boundaries (year,
//! month, day, and hour starts) are wall-clock times in one fixed UTC offset.

use std::ops::{Range, RangeInclusive};

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use timeline_view::MS_PER_DAY;

/// Key identifying a calendar day: `(year, month, day)`.
pub type DayKey = (i32, u32, u32);

/// The reference instant and the offset calendar boundaries are drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Calendar {
    reference: DateTime<Utc>,
    zone: FixedOffset,
}

impl Calendar {
    /// Creates a calendar anchored at `reference`.
    #[must_use]
    pub fn new(reference: DateTime<Utc>, zone: FixedOffset) -> Self {
        Self { reference, zone }
    }

    /// The instant at day offset `0.0`.
    #[must_use]
    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// The offset wall-clock boundaries are computed in.
    #[must_use]
    pub fn zone(&self) -> FixedOffset {
        self.zone
    }

    /// Signed fractional days from the reference to `instant`, at millisecond precision.
    #[must_use]
    pub fn days_from_reference<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> f64 {
        let ms = instant.timestamp_millis() - self.reference.timestamp_millis();
        ms as f64 / MS_PER_DAY
    }

    /// The wall-clock instant `days` after the reference, if representable.
    #[must_use]
    pub fn at_days(&self, days: f64) -> Option<DateTime<FixedOffset>> {
        let ms = days * MS_PER_DAY;
        if !ms.is_finite() {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "out-of-range values saturate and are then rejected by TimeDelta"
        )]
        let delta = TimeDelta::try_milliseconds(ms as i64)?;
        self.reference
            .checked_add_signed(delta)
            .map(|t| t.with_timezone(&self.zone))
    }

    /// Day offset of the wall-clock time `year-month-day hour:00` (month and day 1-based).
    #[must_use]
    pub fn days_at(&self, year: i32, month: u32, day: u32, hour: u32) -> Option<f64> {
        self.zone
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .map(|t| self.days_from_reference(&t))
    }

    /// Wall-clock midnight of `date` as an instant in this calendar's offset.
    #[must_use]
    pub fn midnight(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        self.localize(date.and_hms_opt(0, 0, 0)?)
    }

    /// Interprets a naive wall-clock time in this calendar's offset.
    #[must_use]
    pub fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        self.zone.from_local_datetime(&naive).single()
    }

    /// The calendar day `instant` falls on in this calendar's offset.
    #[must_use]
    pub fn day_key(&self, instant: &DateTime<Utc>) -> DayKey {
        let local = instant.with_timezone(&self.zone);
        (local.year(), local.month(), local.day())
    }

    /// Years touched by a day range, or `None` if either end is unrepresentable.
    #[must_use]
    pub fn years_spanning(&self, days: &Range<f64>) -> Option<RangeInclusive<i32>> {
        let start = self.at_days(days.start)?;
        let end = self.at_days(days.end)?;
        Some(start.year()..=end.year())
    }
}

/// Number of days in `month` (1-based) of `year`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map_or(0, |d| d.day())
}
