// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use timeline_imaging::{Surface, TextStyle};

use super::Painter;

pub(super) fn paint<S: Surface + ?Sized>(p: &mut Painter<'_, S>) {
    let config = p.config;
    let colors = &config.colors;
    for year in p.years() {
        let Some(x) = p.x_at(year, 1, 1, 0) else {
            continue;
        };
        p.tick(x, 15.0, 1.0, colors.year_line.0);
        p.centered_text(&year.to_string(), x, 35.0, TextStyle::regular(13.0), colors.text.0);
    }
}
