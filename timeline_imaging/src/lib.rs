// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline Imaging: the drawing surface a timeline renders into.
//!
//! This crate defines a deliberately tiny draw-op IR, just what a time axis
//! needs (filled rectangles, stroked line segments, and possibly rotated
//! single-line text), and the [`Surface`] trait that hosts implement to put
//! those ops on screen.
//!
//! # Position in the stack
//!
//! - **Timeline**: layout, calendar grids, event bars, interaction. Lives in
//!   `timeline_canvas`.
//! - **Imaging IR (this crate)**: [`DrawOp`] values plus text measurement.
//! - **Hosts**: a web canvas, a Vello scene, a terminal, or the
//!   [`RecordingSurface`] used for headless rendering and tests.
//!
//! Creating the surface, sizing it for the device pixel ratio, and presenting
//! frames are the host's job. A surface reports its size in logical pixels
//! and the timeline lays out against that.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Line, Size};
//! use peniko::Color;
//! use timeline_imaging::{DrawOp, RecordingSurface, Surface, SurfaceExt};
//!
//! let mut surface = RecordingSurface::new(Size::new(200.0, 100.0));
//! surface.begin_frame();
//! surface.stroke_line(Line::new((0.0, 50.0), (200.0, 50.0)), 2.0, Color::BLACK);
//! assert!(matches!(surface.ops()[0], DrawOp::StrokeLine { width: 2.0, .. }));
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect, Size};
use peniko::Color;

/// Font weight for [`TextStyle`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// Horizontal anchoring of text relative to its origin.
///
/// For rotated text the anchor applies along the rotated baseline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The text starts at the origin.
    #[default]
    Start,
    /// The text is centered on the origin.
    Center,
}

/// Font parameters for a run of text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f64,
    /// Font weight.
    pub weight: FontWeight,
}

impl TextStyle {
    /// A regular-weight style of the given size.
    #[must_use]
    pub const fn regular(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
        }
    }

    /// A bold style of the given size.
    #[must_use]
    pub const fn bold(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// Draw operations a timeline frame is made of.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle in surface pixels.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Stroke a straight line segment with butt caps.
    StrokeLine {
        /// Segment in surface pixels.
        line: Line,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Fill a single line of text.
    FillText {
        /// The text to draw.
        text: String,
        /// Baseline anchor point in surface pixels.
        origin: Point,
        /// Font parameters.
        style: TextStyle,
        /// Anchoring along the baseline.
        align: TextAlign,
        /// Rotation about `origin`, in radians; negative turns counter-clockwise
        /// on a y-down surface, so `-PI/2` draws bottom-to-top.
        angle: f64,
        /// Fill color.
        color: Color,
    },
}

/// A host-provided drawing target.
pub trait Surface {
    /// Current size in logical pixels.
    fn size(&self) -> Size;

    /// Apply one draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Advance width of `text` when drawn with `style`, in pixels.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64;

    /// Called before the first op of each frame.
    ///
    /// The default does nothing; retained-mode hosts can reset here.
    #[inline]
    fn begin_frame(&mut self) {}
}

/// Convenience helpers for [`Surface`] implementations and callers.
///
/// This is separate from [`Surface`] so that `&mut dyn Surface` stays usable.
pub trait SurfaceExt: Surface {
    /// Fill `rect` with `color`.
    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw(DrawOp::FillRect { rect, color });
    }

    /// Stroke `line` with the given width and color.
    #[inline]
    fn stroke_line(&mut self, line: Line, width: f64, color: Color) {
        self.draw(DrawOp::StrokeLine { line, width, color });
    }

    /// Stroke a vertical tick at `x` extending `half_len` above and below `y`.
    #[inline]
    fn stroke_tick(&mut self, x: f64, y: f64, half_len: f64, width: f64, color: Color) {
        self.stroke_line(Line::new((x, y - half_len), (x, y + half_len)), width, color);
    }

    /// Fill unrotated text.
    #[inline]
    fn fill_text(
        &mut self,
        text: impl Into<String>,
        origin: Point,
        style: TextStyle,
        align: TextAlign,
        color: Color,
    ) {
        self.fill_text_rotated(text, origin, style, align, 0.0, color);
    }

    /// Fill text rotated by `angle` radians about `origin`.
    #[inline]
    fn fill_text_rotated(
        &mut self,
        text: impl Into<String>,
        origin: Point,
        style: TextStyle,
        align: TextAlign,
        angle: f64,
        color: Color,
    ) {
        self.draw(DrawOp::FillText {
            text: text.into(),
            origin,
            style,
            align,
            angle,
            color,
        });
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

/// Average glyph advance, as a fraction of font size, used by [`RecordingSurface`].
const DEFAULT_ADVANCE: f64 = 0.6;

/// In-memory surface that records the ops of the most recent frame.
///
/// Text is measured with a fixed per-character advance, which keeps layout
/// deterministic for headless rendering and tests.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    advance: f64,
    frames: u64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Creates a surface of the given logical size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            advance: DEFAULT_ADVANCE,
            frames: 0,
            ops: Vec::new(),
        }
    }

    /// Sets the per-character advance as a fraction of font size.
    #[must_use]
    pub fn with_advance(mut self, advance: f64) -> Self {
        self.advance = advance;
        self
    }

    /// Changes the reported size, as a host would on window resize.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Ops recorded since the last [`Surface::begin_frame`].
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of frames begun so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Iterates over the text of every recorded [`DrawOp::FillText`].
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        let chars = text.chars().count() as f64;
        chars * style.size * self.advance
    }

    fn begin_frame(&mut self) {
        self.frames += 1;
        self.ops.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn begin_frame_discards_previous_ops() {
        let mut surface = RecordingSurface::new(Size::new(10.0, 10.0));
        surface.begin_frame();
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert_eq!(surface.ops().len(), 1);

        surface.begin_frame();
        assert!(surface.ops().is_empty());
        assert_eq!(surface.frames(), 2);
    }

    #[test]
    fn tick_is_vertical_and_symmetric() {
        let mut surface = RecordingSurface::new(Size::new(10.0, 10.0));
        surface.stroke_tick(4.0, 50.0, 15.0, 1.0, Color::BLACK);
        match &surface.ops()[0] {
            DrawOp::StrokeLine { line, width, .. } => {
                assert_eq!(line.p0, Point::new(4.0, 35.0));
                assert_eq!(line.p1, Point::new(4.0, 65.0));
                assert_eq!(*width, 1.0);
            }
            other => panic!("expected a stroke, got {other:?}"),
        }
    }

    #[test]
    fn text_is_recorded_and_measured() {
        let mut surface = RecordingSurface::new(Size::new(10.0, 10.0)).with_advance(0.5);
        let style = TextStyle::bold(10.0);
        assert_eq!(surface.measure_text("March", &style), 25.0);

        surface.fill_text_rotated(
            "March",
            Point::new(1.0, 2.0),
            style,
            TextAlign::Start,
            -FRAC_PI_2,
            Color::BLACK,
        );
        surface.fill_text(
            "2025",
            Point::ORIGIN,
            TextStyle::regular(13.0),
            TextAlign::Center,
            Color::BLACK,
        );
        let texts: Vec<&str> = surface.texts().collect();
        assert_eq!(texts, ["March", "2025"]);
        assert!(matches!(
            surface.ops()[0],
            DrawOp::FillText { angle, .. } if angle == -FRAC_PI_2
        ));
    }
}
