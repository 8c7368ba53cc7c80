// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch gesture classification.
//!
//! A single finger behaves exactly like a mouse drag. Two fingers are
//! recognized as a pinch so that callers can tell them apart from a pan, but
//! the timeline does not act on pinches yet.

use kurbo::Point;

/// What a set of simultaneous touch points amounts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchGesture {
    /// No fingers down.
    None,
    /// One finger: a horizontal pan at the given position.
    Pan(Point),
    /// Two fingers.
    Pinch(Point, Point),
    /// Three or more fingers.
    Other(usize),
}

impl TouchGesture {
    /// Classifies the touch points currently on the surface.
    #[must_use]
    pub fn classify(touches: &[Point]) -> Self {
        match touches {
            [] => Self::None,
            [p] => Self::Pan(*p),
            [a, b] => Self::Pinch(*a, *b),
            more => Self::Other(more.len()),
        }
    }

    /// Distance between the two fingers of a pinch.
    #[must_use]
    pub fn pinch_span(&self) -> Option<f64> {
        match self {
            Self::Pinch(a, b) => Some(a.distance(*b)),
            _ => None,
        }
    }
}
