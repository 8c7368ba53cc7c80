// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlays drawn above the calendar grid.

use timeline_imaging::{Surface, SurfaceExt, TextStyle};

use super::{EVENT_CULL_MARGIN, Painter, event_bar_rect};
use crate::event::{EventId, TimelineEvent};
use crate::hit::RenderCache;

/// The marker at the reference instant, labeled with the upper-cased `now` string.
pub(super) fn now_marker<S: Surface + ?Sized>(p: &mut Painter<'_, S>) {
    let config = p.config;
    let color = config.colors.today_marker.0;
    let x = p.axis.days_to_x(0.0);
    p.tick(x, config.layout.marker_line_length * 0.5, 2.0, color);
    let label = config.translations.get("now").to_uppercase();
    let dy = -config.layout.month_label_offset - 10.0;
    p.centered_text(&label, x, dy, TextStyle::bold(11.0), color);
}

pub(super) fn events<S: Surface + ?Sized>(
    p: &mut Painter<'_, S>,
    events: &[TimelineEvent],
    hovered: Option<EventId>,
    cache: &mut RenderCache,
) {
    let config = p.config;
    let stride = config.event_bar_height + config.event_bar_spacing;
    for event in events {
        let x = p.axis.days_to_x(p.calendar.days_from_reference(&event.date));
        if x < -EVENT_CULL_MARGIN || x > p.width + EVENT_CULL_MARGIN {
            continue;
        }
        let base_y =
            p.baseline + config.layout.event_bar_base_y - f64::from(event.stack_level) * stride;
        let rect = event_bar_rect(x, base_y, config.event_bar_width, config.event_bar_height);
        let color = if hovered == Some(event.id) {
            config.colors.event_bar_hover.0
        } else {
            config.colors.event_bar.0
        };
        p.surface.fill_rect(rect, color);
        cache.insert(event.id, rect);
    }
}

pub(super) fn hover_guide<S: Surface + ?Sized>(p: &mut Painter<'_, S>, x: f64) {
    let config = p.config;
    p.tick(
        x,
        config.layout.marker_line_length * 0.5,
        1.0,
        config.colors.hover_marker.0,
    );
}
