// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The loaded event set: chronological order and per-day stacking.

use hashbrown::HashMap;

use crate::calendar::{Calendar, DayKey};
use crate::event::{EventId, EventInput, TimelineEvent};

/// Outcome of [`EventStore::replace`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Events kept.
    pub loaded: usize,
    /// Inputs dropped because no date could be recovered.
    pub dropped: usize,
}

/// Owns the loaded events, sorted ascending by date.
///
/// Every event carries a stack level: its position among the events that
/// share its calendar day, capped at `max_stack - 1` so that overflow events
/// share the top slot.
#[derive(Clone, Debug, Default)]
pub struct EventStore {
    events: Vec<TimelineEvent>,
    positions: HashMap<EventId, usize>,
    next_id: u64,
}

impl EventStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole event set.
    ///
    /// Inputs are dated against `calendar`, given fresh ids in input order,
    /// stably sorted by date, and stacked by calendar day. Inputs without a
    /// recoverable date are dropped with a warning.
    pub fn replace<I>(&mut self, inputs: I, calendar: &Calendar, max_stack: u32) -> LoadSummary
    where
        I: IntoIterator<Item = EventInput>,
    {
        let mut summary = LoadSummary::default();
        let mut events = Vec::new();
        for input in inputs {
            let Some(date) = input.resolve_date(calendar) else {
                tracing::warn!(
                    title = %input.title,
                    date = ?input.date,
                    "dropping event without a usable date"
                );
                summary.dropped += 1;
                continue;
            };
            let id = EventId(self.next_id);
            self.next_id += 1;
            events.push(input.into_event(id, date));
        }
        events.sort_by_key(TimelineEvent::date);
        assign_stack_levels(&mut events, calendar, max_stack);

        self.positions = events
            .iter()
            .enumerate()
            .map(|(i, event)| (event.id, i))
            .collect();
        self.events = events;
        summary.loaded = self.events.len();
        summary
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&TimelineEvent> {
        self.positions.get(&id).map(|&i| &self.events[i])
    }

    /// Events in ascending date order.
    #[must_use]
    pub fn as_slice(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Iterates in ascending date order.
    pub fn iter(&self) -> core::slice::Iter<'_, TimelineEvent> {
        self.events.iter()
    }

    /// Number of loaded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a TimelineEvent;
    type IntoIter = core::slice::Iter<'a, TimelineEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Assigns stack levels to date-sorted `events`, grouping by calendar day.
pub fn assign_stack_levels(events: &mut [TimelineEvent], calendar: &Calendar, max_stack: u32) {
    let cap = max_stack.saturating_sub(1);
    let mut per_day: HashMap<DayKey, u32> = HashMap::new();
    for event in events {
        let seen = per_day.entry(calendar.day_key(&event.date)).or_insert(0);
        event.stack_level = (*seen).min(cap);
        *seen = seen.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn calendar() -> Calendar {
        Calendar::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            FixedOffset::east_opt(0).unwrap(),
        )
    }

    fn at(d: u32, h: u32, title: &str) -> EventInput {
        EventInput::new(Utc.with_ymd_and_hms(2024, 3, d, h, 0, 0).unwrap(), title)
    }

    fn levels(store: &EventStore) -> Vec<u32> {
        store.iter().map(TimelineEvent::stack_level).collect()
    }

    #[test]
    fn overflow_shares_the_top_slot() {
        let mut store = EventStore::new();
        let inputs = (0..7).map(|h| at(5, h, "same day"));
        store.replace(inputs, &calendar(), 5);
        assert_eq!(levels(&store), [0, 1, 2, 3, 4, 4, 4]);
    }

    #[test]
    fn sorted_by_date_and_grouped_by_day() {
        let mut store = EventStore::new();
        let inputs = vec![
            at(9, 12, "c"),
            at(2, 8, "a"),
            at(9, 1, "b"),
            at(2, 20, "a2"),
            at(30, 0, "d"),
        ];
        store.replace(inputs, &calendar(), 5);
        let titles: Vec<&str> = store.iter().map(TimelineEvent::title).collect();
        assert_eq!(titles, ["a", "a2", "b", "c", "d"]);
        assert_eq!(levels(&store), [0, 1, 0, 1, 0]);
        assert!(store.as_slice().windows(2).all(|w| w[0].date() <= w[1].date()));
    }

    #[test]
    fn equal_dates_keep_load_order() {
        let mut store = EventStore::new();
        store.replace(vec![at(1, 0, "first"), at(1, 0, "second")], &calendar(), 5);
        let titles: Vec<&str> = store.iter().map(TimelineEvent::title).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn ids_are_never_reused_across_loads() {
        let mut store = EventStore::new();
        store.replace(vec![at(1, 0, "x")], &calendar(), 5);
        let old = store.as_slice()[0].id();
        store.replace(vec![at(1, 0, "y")], &calendar(), 5);
        let new = store.as_slice()[0].id();
        assert_ne!(old, new);
        assert!(store.get(old).is_none());
        assert_eq!(store.get(new).map(TimelineEvent::title), Some("y"));
    }

    #[test]
    fn undated_inputs_are_dropped() {
        let mut store = EventStore::new();
        let summary = store.replace(
            vec![at(1, 0, "ok"), EventInput::default(), EventInput::in_year(1990, "y")],
            &calendar(),
            5,
        );
        assert_eq!(summary, LoadSummary { loaded: 2, dropped: 1 });
        assert_eq!(store.len(), 2);
        assert_eq!(store.as_slice()[0].title(), "y");
    }

    #[test]
    fn empty_load_clears() {
        let mut store = EventStore::new();
        store.replace(vec![at(1, 0, "x")], &calendar(), 5);
        store.replace(Vec::new(), &calendar(), 5);
        assert!(store.is_empty());
    }
}
