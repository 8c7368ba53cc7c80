// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer, wheel, and touch handling.
//!
//! Hosts translate their native events into these calls with positions in
//! surface-local logical pixels:
//!
//! - Dragging pans one-to-one. Pressing stops any glide in progress so the
//!   view tracks the pointer exactly.
//! - Plain wheel ticks are debounced into discrete zoom steps; with shift
//!   held the wheel pans instead.
//! - A click only selects an event once the pan has settled, so releasing a
//!   drag over an event bar does not count as clicking it.
//! - One finger drags like a mouse. Two-finger gestures are recognized and
//!   ignored.

use kurbo::Point;
use timeline_event_state::drag::DragState;
use timeline_event_state::hover::HoverState;
use timeline_event_state::touch::TouchGesture;
use timeline_event_state::wheel::WheelZoom;
use timeline_imaging::Surface;
use timeline_view::ZoomDirection;

use crate::emitter::{ClickedEvent, EventClick};
use crate::event::EventId;
use crate::timeline::Timeline;

/// One wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInput {
    /// Vertical scroll delta; negative scrolls up.
    pub delta_y: f64,
    /// Whether shift was held, which turns the wheel into a horizontal pan.
    pub shift: bool,
    /// Pointer position, used as the zoom focal point.
    pub position: Option<Point>,
}

impl WheelInput {
    /// A plain wheel tick at `position`.
    #[must_use]
    pub fn new(delta_y: f64, position: Point) -> Self {
        Self {
            delta_y,
            shift: false,
            position: Some(position),
        }
    }

    /// The same tick with shift held.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Interaction state owned by a timeline.
#[derive(Clone, Debug)]
pub(crate) struct InputState {
    pub(crate) drag: DragState,
    pub(crate) hover: HoverState<EventId>,
    pub(crate) wheel: WheelZoom,
}

impl InputState {
    pub(crate) fn new(wheel_ticks: u32) -> Self {
        Self {
            drag: DragState::default(),
            hover: HoverState::new(),
            wheel: WheelZoom::new(wheel_ticks),
        }
    }
}

impl<S: Surface> Timeline<S> {
    /// Button pressed: starts a drag.
    pub fn pointer_down(&mut self, pos: Point) {
        self.input.drag.start(pos.x);
        self.pan.hold();
    }

    /// Pointer moved: pans while dragging, otherwise re-evaluates hover.
    pub fn pointer_move(&mut self, pos: Point) {
        if let Some(dx) = self.input.drag.update(pos.x) {
            self.input.hover.set_x(pos.x);
            self.pan.pan_by(dx);
            return;
        }
        let target = self.event_at(pos);
        if self.input.hover.update(pos.x, target) {
            tracing::trace!(hovered = ?target, "hover target changed");
        }
    }

    /// Button released.
    pub fn pointer_up(&mut self) {
        self.input.drag.end();
    }

    /// Pointer left the surface: ends any drag and clears hover.
    pub fn pointer_leave(&mut self) {
        self.input.drag.end();
        self.input.hover.clear();
    }

    /// Wheel tick. Returns the zoom step taken, if any.
    pub fn wheel(&mut self, input: WheelInput) -> Option<ZoomDirection> {
        if input.shift {
            self.pan.pan_by(-input.delta_y);
            return None;
        }
        let direction = self.input.wheel.tick(input.delta_y)?;
        self.zoom(direction, input.position.map(|p| p.x))
            .then_some(direction)
    }

    /// Click at `pos`. Emits [`EventClick`] and returns the event hit, if any.
    ///
    /// Ignored while the pan is more than the configured settle threshold
    /// away from its target.
    pub fn click(&mut self, pos: Point) -> Option<EventId> {
        if !self
            .pan
            .is_settled_within(self.config.click_settle_threshold)
        {
            tracing::trace!("click ignored while panning");
            return None;
        }
        let id = self.event_at(pos)?;
        let event = self.store.get(id)?.clone();
        let rect = self.cache.get(id)?;
        self.emitter.emit::<EventClick>(&ClickedEvent { event, rect });
        Some(id)
    }

    /// Touches began; `touches` are all points currently down.
    pub fn touch_start(&mut self, touches: &[Point]) {
        match TouchGesture::classify(touches) {
            TouchGesture::Pan(p) => self.pointer_down(p),
            gesture @ TouchGesture::Pinch(..) => {
                tracing::trace!(span = ?gesture.pinch_span(), "pinch gestures are not handled");
            }
            TouchGesture::None | TouchGesture::Other(_) => {}
        }
    }

    /// Touches moved.
    pub fn touch_move(&mut self, touches: &[Point]) {
        match TouchGesture::classify(touches) {
            TouchGesture::Pan(p) => {
                if let Some(dx) = self.input.drag.update(p.x) {
                    self.pan.pan_by(dx);
                }
            }
            gesture @ TouchGesture::Pinch(..) => {
                tracing::trace!(span = ?gesture.pinch_span(), "pinch gestures are not handled");
            }
            TouchGesture::None | TouchGesture::Other(_) => {}
        }
    }

    /// All touches lifted.
    pub fn touch_end(&mut self) {
        self.input.drag.end();
    }
}
