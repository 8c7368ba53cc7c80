// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where each event was last drawn, and which event a point lands on.

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::event::{EventId, TimelineEvent};

/// Screen rectangles of the events drawn in the most recent frame.
///
/// Cleared at the start of every frame, so an event that was scrolled out of
/// view has no rectangle and cannot be hit.
#[derive(Clone, Debug, Default)]
pub struct RenderCache {
    rects: HashMap<EventId, Rect>,
}

impl RenderCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every rectangle.
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Records where `id` was drawn.
    pub fn insert(&mut self, id: EventId, rect: Rect) {
        self.rects.insert(id, rect);
    }

    /// Where `id` was drawn, if it was.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    /// Number of cached rectangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if nothing was drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The topmost event whose rectangle, grown by `margin` on every side,
    /// contains `pt` (edges inclusive).
    ///
    /// `events` must be in drawing order; later entries are drawn on top and
    /// win.
    #[must_use]
    pub fn hit_test<'a>(
        &self,
        events: &'a [TimelineEvent],
        pt: Point,
        margin: f64,
    ) -> Option<&'a TimelineEvent> {
        events.iter().rev().find(|event| {
            self.get(event.id())
                .is_some_and(|rect| contains_inclusive(rect.inflate(margin, margin), pt))
        })
    }
}

fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}
