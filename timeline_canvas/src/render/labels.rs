// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Greedy left-to-right placement of rotated labels.
///
/// A candidate is rejected when its left edge lies before the right edge of
/// any label accepted earlier in the same pass. Candidates must be offered in
/// increasing x order; earlier labels win ties.
#[derive(Clone, Debug, Default)]
pub struct LabelPacker {
    accepted: Vec<Rect>,
}

impl LabelPacker {
    /// An empty packer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `rect` if it clears every accepted label.
    pub fn try_place(&mut self, rect: Rect) -> bool {
        if self.accepted.iter().any(|prior| rect.x0 < prior.x1) {
            return false;
        }
        self.accepted.push(rect);
        true
    }

    /// Labels accepted so far, in placement order.
    #[must_use]
    pub fn accepted(&self) -> &[Rect] {
        &self.accepted
    }
}

/// Footprint of text rotated a quarter turn counter-clockwise about `anchor`.
///
/// The text runs upward from `anchor` for `advance` pixels, and its glyphs
/// occupy `font_size` pixels to the left of the anchor column.
#[must_use]
pub fn rotated_label_rect(anchor: Point, advance: f64, font_size: f64) -> Rect {
    Rect::new(anchor.x - font_size, anchor.y - advance, anchor.x, anchor.y)
}
