// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dated events and the loose input shape they are loaded from.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;

/// Identity of a loaded event.
///
/// Ids are handed out in load order and never reused by the same timeline,
/// so an id held across [`Timeline::set_data`](crate::Timeline::set_data)
/// can go stale but cannot alias a different event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

/// A dated event as plotted on the timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEvent {
    pub(crate) id: EventId,
    pub(crate) date: DateTime<Utc>,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) stack_level: u32,
}

impl TimelineEvent {
    /// Stable identity.
    #[must_use]
    pub fn id(&self) -> EventId {
        self.id
    }

    /// When the event happened.
    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Short title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional longer text.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Vertical slot among events sharing its calendar day.
    #[must_use]
    pub fn stack_level(&self) -> u32 {
        self.stack_level
    }
}

/// The `date` field of an [`EventInput`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventDate {
    /// Milliseconds since the Unix epoch, rounded to the nearest whole millisecond.
    Millis(f64),
    /// An RFC 3339 timestamp.
    Instant(DateTime<Utc>),
    /// Anything else; see [`EventInput::resolve_date`].
    Text(String),
}

impl From<DateTime<Utc>> for EventDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

/// An event as supplied by the host, before validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventInput {
    /// When the event happened.
    #[serde(default)]
    pub date: Option<EventDate>,
    /// Fallback used when `date` is missing or unreadable: January 1 of this year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Short title.
    #[serde(default)]
    pub title: String,
    /// Optional longer text.
    #[serde(default)]
    pub description: Option<String>,
}

impl EventInput {
    /// An event at `date`.
    #[must_use]
    pub fn new(date: DateTime<Utc>, title: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            title: title.into(),
            ..Self::default()
        }
    }

    /// An event known only by its year.
    #[must_use]
    pub fn in_year(year: i32, title: impl Into<String>) -> Self {
        Self {
            year: Some(year),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Best-effort instant for this input.
    ///
    /// Text dates are tried as the literal `now` (the reference instant),
    /// RFC 3339, then naive `YYYY-MM-DD[T| ]HH:MM[:SS]`, `YYYY-MM-DD` and a
    /// bare `YYYY` read as wall-clock time in the calendar's offset. If that
    /// fails, a
    /// `year` places the event at local midnight on January 1. Returns `None`
    /// when nothing usable is present.
    #[must_use]
    pub fn resolve_date(&self, calendar: &Calendar) -> Option<DateTime<Utc>> {
        self.date
            .as_ref()
            .and_then(|date| match date {
                EventDate::Millis(ms) => millis_to_instant(*ms),
                EventDate::Instant(instant) => Some(*instant),
                EventDate::Text(text) => parse_text_date(text.trim(), calendar),
            })
            .or_else(|| {
                let year = self.year?;
                let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
                calendar.midnight(jan_first).map(|t| t.to_utc())
            })
    }

    pub(crate) fn into_event(self, id: EventId, date: DateTime<Utc>) -> TimelineEvent {
        TimelineEvent {
            id,
            date,
            title: self.title,
            description: self.description,
            stack_level: 0,
        }
    }
}

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn millis_to_instant(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "out-of-range values saturate and are then rejected by chrono"
    )]
    let whole = ms.round() as i64;
    DateTime::from_timestamp_millis(whole)
}

fn parse_text_date(text: &str, calendar: &Calendar) -> Option<DateTime<Utc>> {
    if text.eq_ignore_ascii_case("now") {
        return Some(calendar.reference());
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.to_utc());
    }
    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .or_else(|| {
            if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let year = text.parse().ok()?;
            NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
        })?;
    calendar.localize(naive).map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    fn calendar() -> Calendar {
        Calendar::new(
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
            FixedOffset::east_opt(3 * 3600).unwrap(),
        )
    }

    fn input(value: serde_json::Value) -> EventInput {
        serde_json::from_value(value).unwrap()
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn accepts_the_usual_date_shapes() {
        let cal = calendar();
        let cases = [
            (json!("2024-05-01T10:00:00Z"), utc(2024, 5, 1, 10, 0, 0)),
            (json!("2024-05-01T10:00:00+02:00"), utc(2024, 5, 1, 8, 0, 0)),
            (json!("2024-05-01T10:00"), utc(2024, 5, 1, 7, 0, 0)),
            (json!("2024-05-01 10:00:30"), utc(2024, 5, 1, 7, 0, 30)),
            (json!("2024-05-01"), utc(2024, 4, 30, 21, 0, 0)),
            (json!("2024"), utc(2023, 12, 31, 21, 0, 0)),
            (json!(0), utc(1970, 1, 1, 0, 0, 0)),
        ];
        for (date, expected) in cases {
            let got = input(json!({ "date": date })).resolve_date(&cal);
            assert_eq!(got, Some(expected), "resolving {date}");
        }
    }

    #[test]
    fn fractional_epoch_millis_round_to_the_nearest_millisecond() {
        let cal = calendar();
        let got = input(json!({ "date": 1_718_452_800_000.6_f64 })).resolve_date(&cal);
        assert_eq!(got, DateTime::from_timestamp_millis(1_718_452_800_001));
        let whole = input(json!({ "date": 1_718_452_800_000.0_f64 })).resolve_date(&cal);
        assert_eq!(whole, Some(utc(2024, 6, 15, 12, 0, 0)));
    }

    #[test]
    fn out_of_range_millis_fall_back_to_year() {
        let cal = calendar();
        let got = input(json!({ "date": 1e300, "year": 2001 })).resolve_date(&cal);
        assert_eq!(got, Some(utc(2000, 12, 31, 21, 0, 0)));
    }

    #[test]
    fn now_means_the_reference_instant() {
        let cal = calendar();
        let got = input(json!({ "date": "now", "title": "Now" })).resolve_date(&cal);
        assert_eq!(got, Some(cal.reference()));
    }

    #[test]
    fn year_rescues_a_bad_or_missing_date() {
        let cal = calendar();
        let jan_first = Utc.with_ymd_and_hms(1998, 12, 31, 21, 0, 0).unwrap();
        assert_eq!(
            input(json!({ "date": "someday", "year": 1999 })).resolve_date(&cal),
            Some(jan_first)
        );
        assert_eq!(EventInput::in_year(1999, "x").resolve_date(&cal), Some(jan_first));
    }

    #[test]
    fn nothing_usable_resolves_to_none() {
        let cal = calendar();
        assert_eq!(input(json!({ "title": "?" })).resolve_date(&cal), None);
        assert_eq!(input(json!({ "date": "31/12/1999" })).resolve_date(&cal), None);
        assert_eq!(input(json!({ "date": "20245" })).resolve_date(&cal), None);
    }

    #[test]
    fn builder_and_fields() {
        let when = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        let event = EventInput::new(when, "Launch")
            .with_description("Liftoff")
            .into_event(EventId(7), when);
        assert_eq!(event.id(), EventId(7));
        assert_eq!(event.date(), when);
        assert_eq!(event.title(), "Launch");
        assert_eq!(event.description(), Some("Liftoff"));
        assert_eq!(event.stack_level(), 0);
    }
}
