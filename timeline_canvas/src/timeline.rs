// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, TimeZone, Utc};
use kurbo::{Point, Rect};
use serde::Deserialize;
use serde_json::Value;
use timeline_imaging::Surface;
use timeline_view::{
    PanAnimator, PanAnimatorDebugInfo, TimeAxis, ZoomDirection, ZoomLadder, ZoomTier,
};

use crate::calendar::Calendar;
use crate::config::Config;
use crate::emitter::{Emitter, ListenerId, Topic, Zoom, ZoomInfo};
use crate::error::TimelineError;
use crate::event::{EventId, EventInput, TimelineEvent};
use crate::hit::RenderCache;
use crate::input::InputState;
use crate::render::{GridTier, Scene, render_frame};
use crate::stack::{EventStore, LoadSummary};

/// An interactive time axis drawing into a host surface.
///
/// The timeline owns its configuration, the loaded events, the view state
/// (zoom tier and pan offsets), the per-frame render cache, and its
/// listeners. All mutation goes through `&mut self`, from input handlers or
/// from [`tick`](Self::tick), on whichever thread the host drives it from.
///
/// The horizontal axis is measured in days from the reference instant
/// captured at construction, which is where the "now" marker sits.
pub struct Timeline<S> {
    pub(crate) surface: S,
    pub(crate) config: Config,
    pub(crate) calendar: Calendar,
    pub(crate) ladder: ZoomLadder,
    pub(crate) pan: PanAnimator,
    pub(crate) store: EventStore,
    pub(crate) cache: RenderCache,
    pub(crate) emitter: Emitter,
    pub(crate) input: InputState,
    pub(crate) focal_event: Option<EventId>,
    pub(crate) grid: GridTier,
}

impl<S> core::fmt::Debug for Timeline<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeline")
            .field("reference", &self.calendar.reference())
            .field("tier", self.ladder.current())
            .field("pan", &self.pan)
            .field("events", &self.store.len())
            .field("focal_event", &self.focal_event)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Timeline<S> {
    /// Builds a timeline from an optional surface and optional JSON overrides.
    ///
    /// Fails without constructing anything if `surface` is `None` or the
    /// overrides do not resolve.
    pub fn init(surface: Option<S>, overrides: Option<&Value>) -> Result<Self, TimelineError> {
        let Some(surface) = surface else {
            tracing::error!("timeline initialization requires a drawing surface");
            return Err(TimelineError::MissingSurface);
        };
        let config = Config::resolve(overrides.unwrap_or(&Value::Null))?;
        Self::new(surface, config)
    }

    /// Builds a timeline whose reference instant is the current time.
    pub fn new(surface: S, config: Config) -> Result<Self, TimelineError> {
        Self::with_reference(surface, config, Utc::now())
    }

    /// Builds a timeline anchored at an explicit reference instant.
    ///
    /// The first frame is drawn before returning.
    pub fn with_reference(
        surface: S,
        config: Config,
        reference: DateTime<Utc>,
    ) -> Result<Self, TimelineError> {
        config.validate()?;
        let calendar = Calendar::new(reference, config.calendar_offset());
        let ladder = ZoomLadder::new(config.zoom_levels.clone());
        let input = InputState::new(config.wheel_zoom_ticks);
        let mut timeline = Self {
            surface,
            config,
            calendar,
            ladder,
            pan: PanAnimator::default(),
            store: EventStore::new(),
            cache: RenderCache::new(),
            emitter: Emitter::new(),
            input,
            focal_event: None,
            grid: GridTier::Years,
        };
        tracing::debug!(
            reference = %reference,
            zone = %timeline.calendar.zone(),
            tiers = timeline.ladder.tiers().len(),
            "timeline initialized"
        );
        timeline.render();
        Ok(timeline)
    }

    /// Replaces every loaded event, then redraws.
    ///
    /// Events are sorted by date and stacked per calendar day. Inputs with
    /// no recoverable date are dropped.
    pub fn set_data<I>(&mut self, events: I) -> LoadSummary
    where
        I: IntoIterator<Item = EventInput>,
    {
        let summary = self
            .store
            .replace(events, &self.calendar, self.config.event_max_stack);
        tracing::debug!(
            loaded = summary.loaded,
            dropped = summary.dropped,
            "event data replaced"
        );
        self.render();
        summary
    }

    /// Like [`set_data`](Self::set_data), from a JSON array of event objects.
    ///
    /// `null` loads nothing. Array elements that are not event objects are
    /// dropped and counted in [`LoadSummary::dropped`].
    pub fn set_data_json(&mut self, events: &Value) -> Result<LoadSummary, TimelineError> {
        let items: &[Value] = match events {
            Value::Null => &[],
            Value::Array(items) => items,
            _ => {
                return Err(TimelineError::InvalidData(serde::de::Error::custom(
                    "expected an array of events",
                )));
            }
        };
        let mut malformed = 0;
        let inputs: Vec<EventInput> = items
            .iter()
            .filter_map(|item| match EventInput::deserialize(item) {
                Ok(input) => Some(input),
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed event");
                    malformed += 1;
                    None
                }
            })
            .collect();
        let mut summary = self.set_data(inputs);
        summary.dropped += malformed;
        Ok(summary)
    }

    /// Anchors subsequent zoom transitions on `id` while it is on screen.
    pub fn set_focal_event(&mut self, id: EventId) {
        self.focal_event = Some(id);
    }

    /// Returns zoom anchoring to the pointer or the view center.
    pub fn clear_focal_event(&mut self) {
        self.focal_event = None;
    }

    /// The focal event, if one is set.
    #[must_use]
    pub fn focal_event(&self) -> Option<EventId> {
        self.focal_event
    }

    /// Subscribes to topic `T`; see [`crate::emitter`].
    pub fn on<T: Topic>(&mut self, listener: impl FnMut(&T::Payload) + 'static) -> ListenerId {
        self.emitter.on::<T>(listener)
    }

    /// Unsubscribes a listener. Returns `false` if it was not subscribed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    /// Redraws after the host changed the surface size.
    pub fn resize(&mut self) {
        let size = self.surface.size();
        tracing::debug!(width = size.width, height = size.height, "surface resized");
        self.render();
    }

    /// Steps one tier finer. See [`zoom`](Self::zoom).
    pub fn zoom_in(&mut self, origin_x: Option<f64>) -> bool {
        self.zoom(ZoomDirection::In, origin_x)
    }

    /// Steps one tier coarser. See [`zoom`](Self::zoom).
    pub fn zoom_out(&mut self, origin_x: Option<f64>) -> bool {
        self.zoom(ZoomDirection::Out, origin_x)
    }

    /// Steps one tier in `direction`, keeping the instant under the focal
    /// column in place.
    ///
    /// The focal column is the focal event's last drawn x if it was on
    /// screen, else `origin_x`, else the view center. The pan jumps to its
    /// new offset without easing, a [`Zoom`] notification is emitted, and
    /// the frame is redrawn. Returns `false`, with no other effect, at either
    /// end of the tier ladder.
    pub fn zoom(&mut self, direction: ZoomDirection, origin_x: Option<f64>) -> bool {
        let width = self.surface.size().width;
        let focal_x = self.focal_x(origin_x, width);
        let Some(step) = self
            .ladder
            .zoom(direction, focal_x, width, self.pan.current())
        else {
            return false;
        };
        self.pan.jump_to(step.offset);

        let tier = *self.ladder.current();
        let info = ZoomInfo {
            level_id: tier.id,
            level_name: self.config.tier_name(tier.id),
        };
        tracing::debug!(
            ?direction,
            level = tier.id,
            focal_x,
            offset = step.offset,
            "zoom tier changed"
        );
        self.emitter.emit::<Zoom>(&info);
        self.render();
        true
    }

    fn focal_x(&self, origin_x: Option<f64>, width: f64) -> f64 {
        self.focal_event
            .and_then(|id| self.cache.get(id))
            .map(|rect| rect.center().x)
            .filter(|x| (0.0..=width).contains(x))
            .or(origin_x)
            .unwrap_or(width * 0.5)
    }

    /// Glides back to the reference instant.
    pub fn go_to_today(&mut self) {
        self.pan.set_target(0.0);
    }

    /// Glides until `date` sits at the view center on the current tier.
    pub fn go_to_date<Tz: TimeZone>(&mut self, date: &DateTime<Tz>) {
        let days = self.calendar.days_from_reference(date);
        let axis = self.axis();
        self.pan.set_target(axis.offset_placing(days, axis.center_x()));
    }

    /// Advances the pan easing by one frame and redraws.
    pub fn tick(&mut self) {
        self.pan.step();
        self.render();
    }

    /// Draws a frame at the current offset.
    pub fn render(&mut self) {
        let scene = Scene {
            config: &self.config,
            calendar: &self.calendar,
            tier: self.ladder.current(),
            offset: self.pan.current(),
            events: self.store.as_slice(),
            hovered: self.input.hover.target().copied(),
            hover_x: self.input.hover.x(),
            dragging: self.input.drag.is_dragging(),
        };
        self.grid = render_frame(&mut self.surface, &scene, &mut self.cache);
    }

    /// The mapping between view x and day offsets at the current offset.
    #[must_use]
    pub fn axis(&self) -> TimeAxis {
        TimeAxis::new(self.surface.size().width, self.pan.current(), self.ladder.current())
    }

    /// The topmost event drawn under `pt` in the last frame, margin included.
    #[must_use]
    pub fn event_at(&self, pt: Point) -> Option<EventId> {
        self.cache
            .hit_test(self.store.as_slice(), pt, self.config.hit_margin)
            .map(TimelineEvent::id)
    }

    /// Where `id` was drawn in the last frame.
    #[must_use]
    pub fn render_rect(&self, id: EventId) -> Option<Rect> {
        self.cache.get(id)
    }
}

impl<S> Timeline<S> {
    /// The current zoom tier.
    #[must_use]
    pub fn tier(&self) -> &ZoomTier {
        self.ladder.current()
    }

    /// Index of the current zoom tier, `0` being the coarsest.
    #[must_use]
    pub fn tier_index(&self) -> usize {
        self.ladder.index()
    }

    /// The calendar grid drawn in the last frame.
    #[must_use]
    pub fn grid_tier(&self) -> GridTier {
        self.grid
    }

    /// The pan offset being drawn.
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        self.pan.current()
    }

    /// The pan offset being eased toward.
    #[must_use]
    pub fn target_offset(&self) -> f64 {
        self.pan.target()
    }

    /// Pan easing state.
    #[must_use]
    pub fn pan_debug_info(&self) -> PanAnimatorDebugInfo {
        self.pan.debug_info()
    }

    /// Loaded events in ascending date order.
    #[must_use]
    pub fn events(&self) -> &[TimelineEvent] {
        self.store.as_slice()
    }

    /// Looks up a loaded event.
    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&TimelineEvent> {
        self.store.get(id)
    }

    /// The event under the pointer, if any.
    #[must_use]
    pub fn hovered_event(&self) -> Option<&TimelineEvent> {
        self.input
            .hover
            .target()
            .and_then(|id| self.store.get(*id))
    }

    /// The pointer column, if the pointer is over the surface.
    #[must_use]
    pub fn hover_x(&self) -> Option<f64> {
        self.input.hover.x()
    }

    /// Whether a pointer or single-finger drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.drag.is_dragging()
    }

    /// The instant at day offset zero.
    #[must_use]
    pub fn reference(&self) -> DateTime<Utc> {
        self.calendar.reference()
    }

    /// Calendar arithmetic in the configured offset.
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// The resolved configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Looks up a UI string, returning `key` when it is missing.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.config.translations.get(key)
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The drawing surface, for hosts that resize it. Call
    /// [`resize`](Self::resize) afterwards.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
