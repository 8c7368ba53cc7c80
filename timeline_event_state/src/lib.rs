// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline Event State: input state managers for a pannable, zoomable timeline.
//!
//! Each module tracks one interaction pattern across a sequence of raw input
//! events and reports what the timeline should do about it:
//!
//! - [`drag`]: Horizontal drag tracking with per-move deltas
//! - [`hover`]: The pointer's column and the item under it
//! - [`wheel`]: Turning a stream of wheel ticks into discrete zoom steps
//! - [`touch`]: Classifying touch point sets into gestures
//!
//! None of these managers touch the view directly. They accept positions in
//! surface-local pixels and return deltas, transitions, or requests that the
//! caller applies to its pan animator and zoom ladder.
//!
//! ## Usage Patterns
//!
//! ### Dragging
//!
//! ```rust
//! use timeline_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(100.0);
//! assert_eq!(drag.update(112.0), Some(12.0));
//! assert_eq!(drag.update(109.0), Some(-3.0));
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```
//!
//! ### Debounced wheel zoom
//!
//! ```rust
//! use timeline_event_state::wheel::WheelZoom;
//! use timeline_view::ZoomDirection;
//!
//! let mut wheel = WheelZoom::new(3);
//! assert_eq!(wheel.tick(-1.0), None);
//! assert_eq!(wheel.tick(-1.0), None);
//! assert_eq!(wheel.tick(-1.0), Some(ZoomDirection::In));
//! assert_eq!(wheel.pending(), 0);
//! ```
//!
//! ### Hover
//!
//! ```rust
//! use timeline_event_state::hover::HoverState;
//!
//! let mut hover = HoverState::new();
//! assert!(hover.update(40.0, Some(7_u64)));
//! assert!(!hover.update(42.0, Some(7)));
//! assert_eq!(hover.target(), Some(&7));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod hover;
pub mod touch;
pub mod wheel;
