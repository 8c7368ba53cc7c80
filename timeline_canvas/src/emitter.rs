// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed notifications for timeline consumers.
//!
//! The set of topics is closed: [`Zoom`] and [`EventClick`]. Each topic is an
//! uninhabited marker type whose [`Topic::Payload`] fixes the shape handed to
//! listeners, so subscribing to a misspelled or mistyped topic does not
//! compile.
//!
//! ```rust
//! use timeline_canvas::emitter::{Emitter, Zoom, ZoomInfo};
//!
//! let mut emitter = Emitter::new();
//! let id = emitter.on::<Zoom>(|info| println!("now showing {}", info.level_name));
//! emitter.emit::<Zoom>(&ZoomInfo { level_id: 2, level_name: "Months".into() });
//! assert!(emitter.off(id));
//! ```

use core::fmt;

use kurbo::Rect;

use crate::event::TimelineEvent;

/// Handle returned by [`Emitter::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A boxed listener for payloads of type `P`.
pub type Listener<P> = Box<dyn FnMut(&P)>;

mod sealed {
    #[expect(unnameable_types, reason = "seals `Topic`")]
    pub trait Sealed {}
}

/// A notification topic.
///
/// This trait is sealed; the topics are [`Zoom`] and [`EventClick`].
pub trait Topic: sealed::Sealed {
    /// What listeners of this topic receive.
    type Payload;

    #[doc(hidden)]
    fn listeners(emitter: &mut Emitter) -> &mut Vec<(ListenerId, Listener<Self::Payload>)>;
}

/// Emitted after every successful zoom transition.
#[derive(Debug)]
pub enum Zoom {}

/// Emitted when a click lands on an event bar.
#[derive(Debug)]
pub enum EventClick {}

/// Payload of [`Zoom`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomInfo {
    /// Id of the tier now in effect.
    pub level_id: u32,
    /// Translated display name of that tier.
    pub level_name: String,
}

/// Payload of [`EventClick`].
#[derive(Clone, Debug, PartialEq)]
pub struct ClickedEvent {
    /// The clicked event, including its stack level.
    pub event: TimelineEvent,
    /// Where the event was drawn in the most recent frame.
    pub rect: Rect,
}

impl sealed::Sealed for Zoom {}
impl sealed::Sealed for EventClick {}

impl Topic for Zoom {
    type Payload = ZoomInfo;

    fn listeners(emitter: &mut Emitter) -> &mut Vec<(ListenerId, Listener<ZoomInfo>)> {
        &mut emitter.zoom
    }
}

impl Topic for EventClick {
    type Payload = ClickedEvent;

    fn listeners(emitter: &mut Emitter) -> &mut Vec<(ListenerId, Listener<ClickedEvent>)> {
        &mut emitter.event_click
    }
}

/// Listener registry for the timeline's topics.
///
/// Listeners run synchronously, in subscription order, on the thread that
/// triggered the notification.
#[derive(Default)]
pub struct Emitter {
    next_id: u64,
    zoom: Vec<(ListenerId, Listener<ZoomInfo>)>,
    event_click: Vec<(ListenerId, Listener<ClickedEvent>)>,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("zoom", &self.zoom.len())
            .field("event_click", &self.event_click.len())
            .finish_non_exhaustive()
    }
}

impl Emitter {
    /// Creates a registry with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `listener` to topic `T`.
    pub fn on<T: Topic>(&mut self, listener: impl FnMut(&T::Payload) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        T::listeners(self).push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not subscribed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.zoom.len() + self.event_click.len();
        self.zoom.retain(|(lid, _)| *lid != id);
        self.event_click.retain(|(lid, _)| *lid != id);
        before != self.zoom.len() + self.event_click.len()
    }

    /// Delivers `payload` to every listener of `T`.
    pub fn emit<T: Topic>(&mut self, payload: &T::Payload) {
        for (_, listener) in T::listeners(self).iter_mut() {
            listener(payload);
        }
    }

    /// Number of listeners subscribed to `T`.
    #[must_use]
    pub fn listener_count<T: Topic>(&mut self) -> usize {
        T::listeners(self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::new();
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            emitter.on::<Zoom>(move |info| {
                seen.borrow_mut().push(format!("{tag}{}", info.level_id));
            });
        }
        emitter.emit::<Zoom>(&ZoomInfo {
            level_id: 3,
            level_name: "Days".into(),
        });
        assert_eq!(*seen.borrow(), ["a3", "b3"]);
    }

    #[test]
    fn off_removes_only_that_listener() {
        let hits = Rc::new(RefCell::new(0));
        let mut emitter = Emitter::new();
        let first = {
            let hits = Rc::clone(&hits);
            emitter.on::<Zoom>(move |_| *hits.borrow_mut() += 1)
        };
        let second = {
            let hits = Rc::clone(&hits);
            emitter.on::<Zoom>(move |_| *hits.borrow_mut() += 10)
        };
        assert!(emitter.off(first));
        assert!(!emitter.off(first));
        emitter.emit::<Zoom>(&ZoomInfo {
            level_id: 1,
            level_name: String::new(),
        });
        assert_eq!(*hits.borrow(), 10);
        assert_eq!(emitter.listener_count::<Zoom>(), 1);
        assert_eq!(emitter.listener_count::<EventClick>(), 0);
        assert!(emitter.off(second));
    }

    #[test]
    fn zoom_info_serializes_camel_case() {
        let value = serde_json::to_value(ZoomInfo {
            level_id: 2,
            level_name: "Months".into(),
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "levelId": 2, "levelName": "Months" }));
    }
}
