// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline Canvas: an infinitely pannable time axis with tiered zoom.
//!
//! A [`Timeline`] draws a horizontal ruler centered on a reference instant
//! ("now"), a calendar grid matching the current zoom tier (years, months,
//! days, or hours), and a thin bar for each loaded event. Bars for events on
//! the same calendar day stack vertically. Users pan by dragging, zoom one
//! tier at a time with the wheel, and click bars to select events.
//!
//! The crate is host-agnostic. Drawing goes through the
//! [`Surface`](timeline_imaging::Surface) trait, input arrives through plain
//! method calls with surface-local positions, and the host drives animation
//! by calling [`Timeline::tick`] (or [`FrameScheduler::run_frame`]) once per
//! displayed frame.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use kurbo::{Point, Size};
//! use serde_json::json;
//! use timeline_canvas::emitter::Zoom;
//! use timeline_canvas::{Timeline, WheelInput};
//! use timeline_imaging::RecordingSurface;
//!
//! let surface = RecordingSurface::new(Size::new(800.0, 300.0));
//! let overrides = json!({ "utcOffsetMinutes": 0, "wheelZoomTicks": 1 });
//! let mut timeline = Timeline::init(Some(surface), Some(&overrides)).unwrap();
//!
//! timeline
//!     .set_data_json(&json!([
//!         { "date": "2024-05-01T10:00:00Z", "title": "Launch" },
//!         { "year": 1969, "title": "Moon landing" },
//!     ]))
//!     .unwrap();
//! assert_eq!(timeline.events().len(), 2);
//!
//! timeline.on::<Zoom>(|info| println!("zoomed to {}", info.level_name));
//! timeline.wheel(WheelInput::new(-1.0, Point::new(400.0, 150.0)));
//! assert_eq!(timeline.tier_index(), 1);
//!
//! // Glide toward a date; each tick eases 2% of the remaining distance.
//! timeline.go_to_date(&Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
//! timeline.tick();
//! assert!(timeline.current_offset() > 0.0);
//! ```
//!
//! ## Configuration
//!
//! [`Config::resolve`] deep-merges JSON overrides over the defaults; see
//! [`config`] for the keys. Errors are reported as [`TimelineError`].
//!
//! ## Logging
//!
//! The crate logs through [`tracing`] and never installs a subscriber.
//! Recovered input problems (unparsable colors, undatable events) are
//! reported at `warn`, loads and zoom transitions at `debug`.

mod calendar;
pub mod config;
pub mod emitter;
mod error;
mod event;
mod hit;
mod input;
pub mod render;
mod scheduler;
mod stack;
mod timeline;

pub use calendar::{Calendar, DayKey, days_in_month};
pub use config::{Config, ConfigError};
pub use error::TimelineError;
pub use event::{EventDate, EventId, EventInput, TimelineEvent};
pub use hit::RenderCache;
pub use input::WheelInput;
pub use render::GridTier;
pub use scheduler::{CancelToken, FrameScheduler, FrameStatus};
pub use stack::{EventStore, LoadSummary, assign_stack_levels};
pub use timeline::Timeline;
pub use timeline_view::{ZoomDirection, ZoomTier};
