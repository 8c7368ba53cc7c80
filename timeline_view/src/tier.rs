// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// One discrete resolution of the time axis.
///
/// Tiers are expected to be ordered by strictly increasing
/// [`pixels_per_year`](Self::pixels_per_year). The `show_*` flags describe
/// which calendar units the tier labels; see [`ZoomTier::kind`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ZoomTier {
    /// Stable identifier reported to listeners and used for display names.
    pub id: u32,
    /// Horizontal density in pixels per (365-day) year.
    pub pixels_per_year: f64,
    /// Label months.
    #[cfg_attr(feature = "serde", serde(default))]
    pub show_months: bool,
    /// Label days.
    #[cfg_attr(feature = "serde", serde(default))]
    pub show_days: bool,
    /// Label hours.
    #[cfg_attr(feature = "serde", serde(default))]
    pub show_hours: bool,
}

/// The calendar granularity a tier draws, most specific flag first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TierKind {
    /// Year boundaries only.
    Years,
    /// Year and month boundaries.
    Months,
    /// Month and day boundaries.
    Days,
    /// Day and hour boundaries.
    Hours,
}

impl ZoomTier {
    /// A tier that labels years only.
    #[must_use]
    pub const fn years(id: u32, pixels_per_year: f64) -> Self {
        Self {
            id,
            pixels_per_year,
            show_months: false,
            show_days: false,
            show_hours: false,
        }
    }

    /// A tier that labels years and months.
    #[must_use]
    pub const fn months(id: u32, pixels_per_year: f64) -> Self {
        Self {
            show_months: true,
            ..Self::years(id, pixels_per_year)
        }
    }

    /// A tier that labels months and days.
    #[must_use]
    pub const fn days(id: u32, pixels_per_year: f64) -> Self {
        Self {
            show_days: true,
            ..Self::months(id, pixels_per_year)
        }
    }

    /// A tier that labels days and hours.
    #[must_use]
    pub const fn hours(id: u32, pixels_per_year: f64) -> Self {
        Self {
            show_hours: true,
            ..Self::days(id, pixels_per_year)
        }
    }

    /// Resolves the flags into a single granularity.
    ///
    /// `show_hours` wins over `show_days`, which wins over `show_months`.
    #[must_use]
    pub fn kind(&self) -> TierKind {
        if self.show_hours {
            TierKind::Hours
        } else if self.show_days {
            TierKind::Days
        } else if self.show_months {
            TierKind::Months
        } else {
            TierKind::Years
        }
    }
}
