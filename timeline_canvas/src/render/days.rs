// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use timeline_imaging::{Surface, TextStyle};

use super::{LabelPacker, Painter};
use crate::calendar::days_in_month;

pub(super) fn paint<S: Surface + ?Sized>(p: &mut Painter<'_, S>) {
    let config = p.config;
    let colors = &config.colors;
    let month_style = TextStyle::regular(11.0);
    let day_style = TextStyle::regular(9.0);
    let mut packer = LabelPacker::new();
    for year in p.years() {
        for month in 1..=12 {
            let Some(month_x) = p.x_at(year, month, 1, 0) else {
                continue;
            };
            if p.in_overscan(month_x) {
                p.tick(month_x, 18.0, 2.0, colors.year_line_thick.0);
                if month == 1 {
                    let label = year.to_string();
                    p.centered_text(&label, month_x, 40.0, TextStyle::bold(14.0), colors.text.0);
                }
                let name = config.translations.month(month);
                p.rotated_label(&mut packer, name, month_x, month_style, colors.text.0);
            }
            if month_x > p.width {
                continue;
            }
            for day in 1..=days_in_month(year, month) {
                let Some(x) = p.x_at(year, month, day, 0) else {
                    continue;
                };
                if !p.on_screen(x) {
                    continue;
                }
                if day > 1 {
                    p.tick(x, 8.0, 1.0, colors.day_line.0);
                }
                p.centered_text(&day.to_string(), x, -15.0, day_style, colors.text_very_light.0);
            }
        }
    }
}
