// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline View: the horizontal time axis behind a zoomable timeline.
//!
//! This crate provides small, headless models for a timeline whose horizontal
//! axis is measured in *days relative to a reference instant* (usually "now").
//! It focuses on:
//! - A fixed, ordered ladder of discrete [`ZoomTier`]s.
//! - Conversion between view pixels and day offsets ([`TimeAxis`]).
//! - Discrete zoom transitions that keep a focal pixel anchored ([`ZoomLadder`]).
//! - Eased panning toward a target offset ([`PanAnimator`]).
//!
//! It does **not** know about calendars, events, or drawing. Callers are
//! expected to:
//! - Turn instants into day offsets (milliseconds / [`MS_PER_DAY`]).
//! - Drive [`PanAnimator::step`] once per displayed frame.
//! - Feed input (drag, wheel) into pan targets and zoom requests at a higher
//!   layer.
//!
//! ## Mapping example
//!
//! ```rust
//! use timeline_view::{TimeAxis, ZoomTier};
//!
//! let tier = ZoomTier::years(1, 365.0);
//! // 800px wide view, panned 10px to the right.
//! let axis = TimeAxis::new(800.0, 10.0, &tier);
//!
//! // The reference instant sits at the center plus the pan offset.
//! assert_eq!(axis.days_to_x(0.0), 410.0);
//! assert_eq!(axis.x_to_days(420.0), 10.0);
//! ```
//!
//! ## Zoom example
//!
//! ```rust
//! use timeline_view::{TimeAxis, ZoomLadder, ZoomTier};
//!
//! let mut ladder = ZoomLadder::new(vec![
//!     ZoomTier::years(1, 100.0),
//!     ZoomTier::months(2, 1200.0),
//! ]);
//!
//! // Zoom in around x = 300 on an 800px view with no pan.
//! let step = ladder.zoom_in(300.0, 800.0, 0.0).unwrap();
//! let before = TimeAxis::new(800.0, 0.0, &ladder.tiers()[step.from]);
//! let after = TimeAxis::new(800.0, step.offset, ladder.current());
//! assert!((before.x_to_days(300.0) - after.x_to_days(300.0)).abs() < 1e-9);
//!
//! // The top of the ladder is a hard stop.
//! assert!(ladder.zoom_in(300.0, 800.0, step.offset).is_none());
//! ```
//!
//! ## Design notes
//!
//! - Pixel density is derived from a fixed 365-day year; there is no leap
//!   year correction, so multi-year spans drift slightly against the real
//!   calendar.
//! - Zoom is discrete. A transition lands on its final offset immediately;
//!   only panning is eased.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod axis;
mod pan;
mod tier;
mod zoom;

pub use axis::{DAYS_PER_YEAR, MS_PER_DAY, TimeAxis, days_to_offset, pixels_per_day, x_to_days};
pub use pan::{PanAnimator, PanAnimatorDebugInfo};
pub use tier::{TierKind, ZoomTier};
pub use zoom::{ZoomDirection, ZoomLadder, ZoomStep};
