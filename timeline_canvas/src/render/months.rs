// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use timeline_imaging::{Surface, TextStyle};

use super::{LabelPacker, Painter};

pub(super) fn paint<S: Surface + ?Sized>(p: &mut Painter<'_, S>) {
    let config = p.config;
    let colors = &config.colors;
    let month_style = TextStyle::regular(10.0);
    let mut packer = LabelPacker::new();
    for year in p.years() {
        if let Some(x) = p.x_at(year, 1, 1, 0) {
            p.tick(x, 20.0, 2.0, colors.year_line_thick.0);
            p.centered_text(&year.to_string(), x, 40.0, TextStyle::bold(14.0), colors.text.0);
        }
        for month in 1..=12 {
            let Some(x) = p.x_at(year, month, 1, 0) else {
                continue;
            };
            // January shares the year tick.
            if month > 1 {
                p.tick(x, 12.0, 1.0, colors.month_line.0);
            }
            let name = config.translations.month(month);
            p.rotated_label(&mut packer, name, x, month_style, colors.text_light.0);
        }
    }
}
