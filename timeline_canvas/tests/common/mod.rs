// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for timeline integration tests.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; each test binary uses a different subset."
)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use kurbo::Size;
use serde_json::{Value, json};
use timeline_canvas::{Config, Timeline};
use timeline_imaging::{DrawOp, RecordingSurface};

pub(crate) const WIDTH: f64 = 800.0;
pub(crate) const HEIGHT: f64 = 400.0;
pub(crate) const BASELINE: f64 = HEIGHT / 2.0;

pub(crate) fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub(crate) fn days_after_reference(days: i64) -> DateTime<Utc> {
    reference() + TimeDelta::days(days)
}

pub(crate) fn config(overrides: &Value) -> Config {
    let mut merged = json!({ "utcOffsetMinutes": 0 });
    if let (Some(base), Some(extra)) = (merged.as_object_mut(), overrides.as_object()) {
        base.extend(extra.clone());
    }
    Config::resolve(&merged).unwrap()
}

pub(crate) fn timeline_sized(size: Size, overrides: &Value) -> Timeline<RecordingSurface> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Timeline::with_reference(RecordingSurface::new(size), config(overrides), reference()).unwrap()
}

pub(crate) fn timeline() -> Timeline<RecordingSurface> {
    timeline_sized(Size::new(WIDTH, HEIGHT), &Value::Null)
}

/// Collects payloads delivered to a listener.
pub(crate) fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |payload: &T| sink.borrow_mut().push(payload.clone()))
}

pub(crate) fn rotated_labels(ops: &[DrawOp]) -> Vec<(String, f64)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::FillText {
                text, origin, angle, ..
            } if *angle != 0.0 => Some((text.clone(), origin.x)),
            _ => None,
        })
        .collect()
}
