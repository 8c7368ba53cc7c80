// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::Datelike;
use timeline_imaging::{Surface, TextStyle};

use super::Painter;

pub(super) fn paint<S: Surface + ?Sized>(p: &mut Painter<'_, S>) {
    let config = p.config;
    let colors = &config.colors;
    let window = p.overscan();
    let (Some(start), Some(end)) = (
        p.calendar.at_days(window.start),
        p.calendar.at_days(window.end),
    ) else {
        return;
    };

    let mut date = start.date_naive();
    while let Some(midnight) = p.calendar.midnight(date) {
        if midnight > end {
            break;
        }
        let day_x = p.axis.days_to_x(p.calendar.days_from_reference(&midnight));
        if p.in_overscan(day_x) {
            p.tick(day_x, 20.0, 2.0, colors.year_line_thick.0);
            let label = format!(
                "{} {} {}",
                date.day(),
                config.translations.month(date.month()),
                date.year()
            );
            p.centered_text(&label, day_x, 40.0, TextStyle::bold(12.0), colors.text.0);

            for hour in 1..24 {
                let Some(x) = p.x_at(date.year(), date.month(), date.day(), hour) else {
                    continue;
                };
                if !p.on_screen(x) {
                    continue;
                }
                p.tick(x, 12.0, 1.0, colors.day_line.0);
                let label = format!("{hour:02}:00");
                p.centered_text(&label, x, -18.0, TextStyle::regular(10.0), colors.text_light.0);
            }
        }
        let Some(next) = date.succ_opt() else {
            break;
        };
        date = next;
    }
}
