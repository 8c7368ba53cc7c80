// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panning, zooming, and frame scheduling through the public API.

mod common;

use common::{WIDTH, days_after_reference, recorder, timeline};
use kurbo::Point;
use serde_json::json;
use timeline_canvas::emitter::{Zoom, ZoomInfo};
use timeline_canvas::{EventInput, FrameScheduler, FrameStatus, WheelInput, ZoomDirection};

#[test]
fn go_to_date_centers_the_date() {
    let mut tl = timeline();
    tl.go_to_date(&days_after_reference(10));
    // 100 px/year on the coarsest tier.
    let expected = -10.0 * 100.0 / 365.0;
    assert!((tl.target_offset() - expected).abs() < 1e-9);
    assert!((tl.target_offset() + 2.7397).abs() < 1e-4);
    assert_eq!(tl.current_offset(), 0.0);
}

#[test]
fn go_to_today_when_already_there_changes_nothing() {
    let mut tl = timeline();
    let (zooms, listener) = recorder::<ZoomInfo>();
    tl.on::<Zoom>(listener);
    let before = tl.pan_debug_info();
    tl.go_to_today();
    assert_eq!(tl.pan_debug_info(), before);
    assert_eq!(tl.tier_index(), 0);
    assert!(zooms.borrow().is_empty());
}

#[test]
fn go_to_today_glides_back() {
    let mut tl = timeline();
    tl.wheel(WheelInput::new(120.0, Point::ORIGIN).with_shift());
    let mut scheduler = FrameScheduler::new();
    scheduler.run_frames(&mut tl, 1_000);
    assert_eq!(tl.current_offset(), -120.0);

    tl.go_to_today();
    assert_eq!(tl.target_offset(), 0.0);
    scheduler.run_frames(&mut tl, 1_000);
    assert_eq!(tl.current_offset(), 0.0);
}

#[test]
fn zoom_ends_are_silent_no_ops() {
    let mut tl = timeline();
    let (zooms, listener) = recorder::<ZoomInfo>();
    tl.on::<Zoom>(listener);

    assert!(!tl.zoom_out(None));
    assert_eq!(tl.tier_index(), 0);
    assert!(zooms.borrow().is_empty());

    for _ in 0..3 {
        assert!(tl.zoom_in(None));
    }
    let offset = tl.current_offset();
    assert!(!tl.zoom_in(Some(10.0)));
    assert_eq!(tl.tier_index(), 3);
    assert_eq!(tl.current_offset(), offset);

    let names: Vec<String> = zooms.borrow().iter().map(|z| z.level_name.clone()).collect();
    assert_eq!(names, ["Months", "Days", "Hours"]);
    assert_eq!(zooms.borrow()[2].level_id, 4);
}

#[test]
fn zoom_keeps_the_origin_column_fixed() {
    let mut tl = timeline();
    let before = tl.axis().x_to_days(300.0);
    assert!(tl.zoom_in(Some(300.0)));
    let after = tl.axis().x_to_days(300.0);
    assert!((before - after).abs() < 1e-9);
    assert!((before + 365.0).abs() < 1e-9);
    // The step jumps; nothing is left to ease.
    assert_eq!(tl.current_offset(), tl.target_offset());
    assert!((tl.current_offset() - 1100.0).abs() < 1e-6);

    assert!(tl.zoom_out(Some(300.0)));
    assert!((tl.axis().x_to_days(300.0) + 365.0).abs() < 1e-9);
}

#[test]
fn zoom_without_origin_uses_the_center() {
    let mut tl = timeline();
    tl.wheel(WheelInput::new(50.0, Point::ORIGIN).with_shift());
    let mut scheduler = FrameScheduler::new();
    scheduler.run_frames(&mut tl, 1_000);
    let before = tl.axis().x_to_days(WIDTH / 2.0);
    tl.zoom_in(None);
    assert!((tl.axis().x_to_days(WIDTH / 2.0) - before).abs() < 1e-9);
}

#[test]
fn focal_event_anchors_zoom_while_visible() {
    let mut tl = timeline();
    tl.set_data(vec![
        EventInput::new(days_after_reference(30), "visible"),
        EventInput::new(days_after_reference(3_650), "far away"),
    ]);
    let visible = tl.events()[0].id();
    let far = tl.events()[1].id();
    let x_before = tl.render_rect(visible).unwrap().center().x;

    tl.set_focal_event(visible);
    assert!(tl.zoom_in(Some(100.0)));
    let x_after = tl.render_rect(visible).unwrap().center().x;
    assert!((x_after - x_before).abs() < 1e-6);

    // An event that was not drawn cannot anchor; the origin is used instead.
    tl.set_focal_event(far);
    assert!(tl.render_rect(far).is_none());
    let origin_days = tl.axis().x_to_days(100.0);
    assert!(tl.zoom_in(Some(100.0)));
    assert!((tl.axis().x_to_days(100.0) - origin_days).abs() < 1e-9);

    tl.clear_focal_event();
    assert_eq!(tl.focal_event(), None);
}

#[test]
fn wheel_zoom_is_debounced() {
    let mut tl = timeline();
    let (zooms, listener) = recorder::<ZoomInfo>();
    tl.on::<Zoom>(listener);
    let at = Point::new(250.0, 100.0);

    for _ in 0..3 {
        assert_eq!(tl.wheel(WheelInput::new(-1.0, at)), None);
    }
    assert_eq!(tl.tier_index(), 0);
    assert_eq!(tl.wheel(WheelInput::new(-1.0, at)), Some(ZoomDirection::In));
    assert_eq!(tl.tier_index(), 1);
    assert_eq!(zooms.borrow().len(), 1);

    // The next three ticks start a fresh count.
    for _ in 0..3 {
        tl.wheel(WheelInput::new(5.0, at));
    }
    assert_eq!(tl.tier_index(), 1);
    assert_eq!(tl.wheel(WheelInput::new(5.0, at)), Some(ZoomDirection::Out));
    assert_eq!(tl.tier_index(), 0);
}

#[test]
fn wheel_threshold_comes_from_config() {
    let size = kurbo::Size::new(WIDTH, 300.0);
    let mut tl = common::timeline_sized(size, &json!({ "wheelZoomTicks": 1 }));
    let step = tl.wheel(WheelInput::new(-3.0, Point::new(10.0, 10.0)));
    assert_eq!(step, Some(ZoomDirection::In));
}

#[test]
fn pan_eases_two_percent_per_frame() {
    let mut tl = timeline();
    tl.wheel(WheelInput::new(-100.0, Point::ORIGIN).with_shift());
    assert_eq!(tl.target_offset(), 100.0);

    let mut scheduler = FrameScheduler::new();
    assert_eq!(scheduler.run_frame(&mut tl), FrameStatus::Reschedule);
    assert!((tl.current_offset() - 2.0).abs() < 1e-12);
    scheduler.run_frame(&mut tl);
    assert!((tl.current_offset() - 3.96).abs() < 1e-12);
    assert_eq!(scheduler.frames(), 2);
    assert_eq!(tl.surface().frames(), 3);
}

#[test]
fn cancelled_scheduler_stops() {
    let mut tl = timeline();
    let mut scheduler = FrameScheduler::new();
    let token = scheduler.token();
    assert_eq!(scheduler.run_frames(&mut tl, 5), 5);

    token.cancel();
    assert!(scheduler.token().is_cancelled());
    assert_eq!(scheduler.run_frame(&mut tl), FrameStatus::Stopped);
    assert_eq!(scheduler.run_frames(&mut tl, 5), 0);
    assert_eq!(scheduler.frames(), 5);
}
