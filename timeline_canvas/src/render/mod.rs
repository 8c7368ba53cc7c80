// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame rendering.
//!
//! A frame is drawn back to front: background, baseline ruler, one calendar
//! grid, the "now" marker, event bars, and the hover guideline. Exactly one
//! [`GridTier`] is chosen per frame from the current zoom tier.

use core::ops::{Range, RangeInclusive};

use kurbo::{Point, Rect};
use peniko::Color;
use timeline_imaging::{Surface, SurfaceExt, TextAlign, TextStyle};
use timeline_view::{TierKind, TimeAxis, ZoomTier};

use crate::calendar::Calendar;
use crate::config::Config;
use crate::event::{EventId, TimelineEvent};
use crate::hit::RenderCache;

mod days;
mod hours;
mod labels;
mod marks;
mod months;
mod years;

pub use labels::{LabelPacker, rotated_label_rect};

/// Widest overscan window, in days, that still gets the hour grid.
///
/// Beyond this the hour labels would be unreadable and the day grid is drawn
/// instead.
pub const MAX_HOUR_GRID_DAYS: f64 = 3.0;

/// Events further than this outside the view are not drawn.
pub const EVENT_CULL_MARGIN: f64 = 50.0;

/// Width of the baseline ruler.
const RULER_WIDTH: f64 = 2.0;

/// The calendar grid drawn for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridTier {
    /// Year ticks with year labels.
    Years,
    /// Year ticks, month ticks, rotated month names.
    Months,
    /// Month ticks, rotated month names, day ticks and numbers.
    Days,
    /// Day ticks with full dates, hour ticks with `HH:00` labels.
    Hours,
}

impl GridTier {
    /// Chooses the grid for `tier` on a view of `width` pixels.
    ///
    /// An hour tier falls back to [`GridTier::Days`] when its overscan window
    /// spans more than [`MAX_HOUR_GRID_DAYS`].
    #[must_use]
    pub fn select(tier: &ZoomTier, axis: &TimeAxis, width: f64) -> Self {
        match tier.kind() {
            TierKind::Years => Self::Years,
            TierKind::Months => Self::Months,
            TierKind::Days => Self::Days,
            TierKind::Hours => {
                let window = axis.overscan_days(width);
                if window.end - window.start > MAX_HOUR_GRID_DAYS {
                    Self::Days
                } else {
                    Self::Hours
                }
            }
        }
    }

    fn paint<S: Surface + ?Sized>(self, painter: &mut Painter<'_, S>) {
        match self {
            Self::Years => years::paint(painter),
            Self::Months => months::paint(painter),
            Self::Days => days::paint(painter),
            Self::Hours => hours::paint(painter),
        }
    }
}

/// Everything a frame depends on besides the surface.
#[derive(Debug)]
pub(crate) struct Scene<'a> {
    pub(crate) config: &'a Config,
    pub(crate) calendar: &'a Calendar,
    pub(crate) tier: &'a ZoomTier,
    pub(crate) offset: f64,
    pub(crate) events: &'a [TimelineEvent],
    pub(crate) hovered: Option<EventId>,
    pub(crate) hover_x: Option<f64>,
    pub(crate) dragging: bool,
}

/// Draws one frame of `scene` and refills `cache` with the event rectangles.
pub(crate) fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    scene: &Scene<'_>,
    cache: &mut RenderCache,
) -> GridTier {
    let size = surface.size();
    surface.begin_frame();
    cache.clear();

    let colors = &scene.config.colors;
    let baseline = size.height * 0.5 + scene.config.layout.ruler_y_offset;
    surface.fill_rect(size.to_rect(), colors.background.0);
    surface.stroke_line(
        kurbo::Line::new((0.0, baseline), (size.width, baseline)),
        RULER_WIDTH,
        colors.ruler.0,
    );

    let axis = TimeAxis::new(size.width, scene.offset, scene.tier);
    let grid = GridTier::select(scene.tier, &axis, size.width);
    let mut painter = Painter {
        surface,
        axis,
        width: size.width,
        baseline,
        config: scene.config,
        calendar: scene.calendar,
    };
    grid.paint(&mut painter);
    marks::now_marker(&mut painter);
    marks::events(&mut painter, scene.events, scene.hovered, cache);
    if !scene.dragging {
        if let Some(x) = scene.hover_x {
            marks::hover_guide(&mut painter, x);
        }
    }
    grid
}

/// A surface plus the frame geometry the grid painters share.
struct Painter<'a, S: ?Sized> {
    surface: &'a mut S,
    axis: TimeAxis,
    width: f64,
    baseline: f64,
    config: &'a Config,
    calendar: &'a Calendar,
}

impl<S: Surface + ?Sized> Painter<'_, S> {
    fn overscan(&self) -> Range<f64> {
        self.axis.overscan_days(self.width)
    }

    /// Calendar years touched by the overscan window; empty when it leaves
    /// the representable range.
    fn years(&self) -> RangeInclusive<i32> {
        self.calendar
            .years_spanning(&self.overscan())
            .unwrap_or(1..=0)
    }

    fn in_overscan(&self, x: f64) -> bool {
        x >= -self.width * 0.5 && x <= self.width * 1.5
    }

    fn on_screen(&self, x: f64) -> bool {
        x >= 0.0 && x <= self.width
    }

    /// View x of the wall-clock time `year-month-day hour:00`.
    fn x_at(&self, year: i32, month: u32, day: u32, hour: u32) -> Option<f64> {
        self.calendar
            .days_at(year, month, day, hour)
            .map(|days| self.axis.days_to_x(days))
    }

    fn tick(&mut self, x: f64, half_len: f64, width: f64, color: Color) {
        self.surface
            .stroke_tick(x, self.baseline, half_len, width, color);
    }

    /// Text centered on `x`, `dy` below the baseline (negative is above).
    fn centered_text(&mut self, text: &str, x: f64, dy: f64, style: TextStyle, color: Color) {
        let origin = Point::new(x, self.baseline + dy);
        self.surface
            .fill_text(text, origin, style, TextAlign::Center, color);
    }

    /// A label reading bottom to top from just above the baseline at `x`,
    /// drawn only if `packer` has room for it.
    fn rotated_label(
        &mut self,
        packer: &mut LabelPacker,
        text: &str,
        x: f64,
        style: TextStyle,
        color: Color,
    ) -> bool {
        let anchor = Point::new(x, self.baseline - self.config.layout.month_label_offset);
        let advance = self.surface.measure_text(text, &style);
        if !packer.try_place(rotated_label_rect(anchor, advance, style.size)) {
            return false;
        }
        self.surface.fill_text_rotated(
            text,
            anchor,
            style,
            TextAlign::Start,
            -core::f64::consts::FRAC_PI_2,
            color,
        );
        true
    }
}

/// The rectangle an event bar occupies with its base at `(x, base_y)`.
#[must_use]
pub fn event_bar_rect(x: f64, base_y: f64, bar_width: f64, bar_height: f64) -> Rect {
    Rect::new(x - bar_width * 0.5, base_y - bar_height, x + bar_width * 0.5, base_y)
}
