// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline configuration: defaults, deep-merged overrides, and validation.
//!
//! A [`Config`] is resolved once, when the timeline is built, and is never
//! mutated afterwards. Overrides arrive as JSON-shaped data (typically parsed
//! from a host's options object) and are merged over the serialized defaults:
//! objects merge key by key at every depth, while arrays and scalars replace
//! the default wholesale. Supplying `zoomLevels` therefore replaces the whole
//! tier table, and supplying `colors.ruler` replaces only the ruler color.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{FixedOffset, Local};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use timeline_view::ZoomTier;

/// Errors produced while resolving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The overrides were neither an object nor `null`.
    #[error("configuration overrides must be a JSON object")]
    NotAnObject,
    /// The merged configuration did not have the expected shape.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The zoom tier table was empty.
    #[error("at least one zoom level is required")]
    NoZoomLevels,
    /// A tier's density was zero, negative, or not finite.
    #[error("zoom level {id} has a non-positive pixelsPerYear")]
    NonPositiveDensity {
        /// Offending tier id.
        id: u32,
    },
    /// Tier densities were not strictly increasing.
    #[error("zoom level {id} is not finer than the level before it")]
    UnorderedZoomLevels {
        /// Offending tier id.
        id: u32,
    },
    /// `eventMaxStack` was zero.
    #[error("eventMaxStack must be at least 1")]
    ZeroMaxStack,
    /// `wheelZoomTicks` was zero.
    #[error("wheelZoomTicks must be at least 1")]
    ZeroWheelTicks,
    /// A bar or hit-test dimension was negative or not finite.
    #[error("{0} must be a finite, non-negative number")]
    InvalidMetric(&'static str),
    /// `utcOffsetMinutes` was outside a day in either direction.
    #[error("utcOffsetMinutes {0} is out of range")]
    InvalidUtcOffset(i32),
}

/// A color that (de)serializes as a CSS color string.
///
/// Equality is judged at 8-bit precision, which is all a color string carries.
#[derive(Clone, Copy, Debug)]
pub struct HexColor(pub Color);

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.0.to_rgba8(), other.0.to_rgba8());
        (a.r, a.g, a.b, a.a) == (b.r, b.g, b.b, b.a)
    }
}

impl HexColor {
    fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Color::from_rgb8(r, g, b))
    }

    fn parse(s: &str) -> Option<Self> {
        parse_color(s)
            .ok()
            .map(|c| Self(c.to_alpha_color::<Srgb>()))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0.to_rgba8();
        if c.a == u8::MAX {
            write!(f, "#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", c.r, c.g, c.b, c.a)
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color `{s}`")))
    }
}

/// The color palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    /// Surface background.
    pub background: HexColor,
    /// Primary label text.
    pub text: HexColor,
    /// Secondary label text (month labels, hours).
    pub text_light: HexColor,
    /// Tertiary label text (day numbers).
    pub text_very_light: HexColor,
    /// Baseline ruler.
    pub ruler: HexColor,
    /// The "now" marker and its label.
    pub today_marker: HexColor,
    /// The hover guideline.
    pub hover_marker: HexColor,
    /// Year ticks on the year tier.
    pub year_line: HexColor,
    /// Major ticks on finer tiers.
    pub year_line_thick: HexColor,
    /// Month ticks.
    pub month_line: HexColor,
    /// Day and hour ticks.
    pub day_line: HexColor,
    /// Event bars.
    pub event_bar: HexColor,
    /// The hovered event bar.
    pub event_bar_hover: HexColor,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: HexColor::rgb(0xFF, 0xFF, 0xFF),
            text: HexColor::rgb(0x21, 0x21, 0x21),
            text_light: HexColor::rgb(0x75, 0x75, 0x75),
            text_very_light: HexColor::rgb(0xBD, 0xBD, 0xBD),
            ruler: HexColor::rgb(0xE0, 0xE0, 0xE0),
            today_marker: HexColor::rgb(0xE5, 0x39, 0x35),
            hover_marker: HexColor::rgb(0x1E, 0x88, 0xE5),
            year_line: HexColor::rgb(0xBD, 0xBD, 0xBD),
            year_line_thick: HexColor::rgb(0x75, 0x75, 0x75),
            month_line: HexColor::rgb(0xEE, 0xEE, 0xEE),
            day_line: HexColor::rgb(0xF5, 0xF5, 0xF5),
            event_bar: HexColor::rgb(0x75, 0x75, 0x75),
            event_bar_hover: HexColor::rgb(0x1E, 0x88, 0xE5),
        }
    }
}

/// Vertical layout offsets, in pixels relative to the vertical center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Baseline position relative to the vertical center.
    pub ruler_y_offset: f64,
    /// Bottom of the first event bar relative to the baseline.
    pub event_bar_base_y: f64,
    /// Full length of the "now" marker and hover guideline.
    pub marker_line_length: f64,
    /// Gap between the baseline and the foot of rotated month labels.
    pub month_label_offset: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            ruler_y_offset: 0.0,
            event_bar_base_y: -60.0,
            marker_line_length: 40.0,
            month_label_offset: 25.0,
        }
    }
}

/// Month names, January first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthNames {
    /// Full names.
    pub full: Vec<String>,
    /// Abbreviations.
    pub short: Vec<String>,
}

/// UI strings.
///
/// Besides the month tables, any flat string key may be supplied. The
/// timeline reads `now`, `today`, and `zoomLevel<id>` for each tier id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    /// Month name tables.
    pub months: MonthNames,
    /// Flat string table.
    #[serde(flatten)]
    pub strings: BTreeMap<String, String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl Default for Translations {
    fn default() -> Self {
        let strings = [
            ("zoomLevel1", "Years"),
            ("zoomLevel2", "Months"),
            ("zoomLevel3", "Days"),
            ("zoomLevel4", "Hours"),
            ("now", "Now"),
            ("today", "Today"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
        Self {
            months: MonthNames {
                full: owned(&[
                    "January",
                    "February",
                    "March",
                    "April",
                    "May",
                    "June",
                    "July",
                    "August",
                    "September",
                    "October",
                    "November",
                    "December",
                ]),
                short: owned(&[
                    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                    "Dec",
                ]),
            },
            strings,
        }
    }
}

impl Translations {
    /// Looks up `key`, returning the key itself when it is missing.
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map_or(key, String::as_str)
    }

    /// Full name of `month` (1 = January), or the raw table key when missing.
    #[must_use]
    pub fn month(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|i| self.months.full.get(i as usize))
            .map_or("months.full", String::as_str)
    }

    /// Abbreviated name of `month` (1 = January), or the raw table key when missing.
    #[must_use]
    pub fn month_short(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|i| self.months.short.get(i as usize))
            .map_or("months.short", String::as_str)
    }
}

/// Fully resolved timeline configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Wheel ticks per discrete zoom step.
    pub wheel_zoom_ticks: u32,
    /// Zoom tiers, coarsest first.
    pub zoom_levels: Vec<ZoomTier>,
    /// Color palette.
    pub colors: Colors,
    /// Layout offsets.
    pub layout: Layout,
    /// Height of one event bar.
    pub event_bar_height: f64,
    /// Vertical gap between stacked event bars.
    pub event_bar_spacing: f64,
    /// Width of an event bar.
    pub event_bar_width: f64,
    /// Number of stack slots per calendar day; later events share the top slot.
    pub event_max_stack: u32,
    /// Slack around an event bar that still counts as a hit.
    pub hit_margin: f64,
    /// Clicks are ignored while the pan is further than this from its target.
    pub click_settle_threshold: f64,
    /// Fixed UTC offset for calendar boundaries; the host's local offset when absent.
    pub utc_offset_minutes: Option<i32>,
    /// UI strings.
    pub translations: Translations,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wheel_zoom_ticks: 4,
            zoom_levels: vec![
                ZoomTier::years(1, 100.0),
                ZoomTier::months(2, 1200.0),
                ZoomTier::days(3, 365.0 * 50.0),
                ZoomTier::hours(4, 365.0 * 24.0 * 60.0),
            ],
            colors: Colors::default(),
            layout: Layout::default(),
            event_bar_height: 8.0,
            event_bar_spacing: 4.0,
            event_bar_width: 3.0,
            event_max_stack: 5,
            hit_margin: 10.0,
            click_settle_threshold: 2.0,
            utc_offset_minutes: None,
            translations: Translations::default(),
        }
    }
}

impl Config {
    /// Deep-merges `overrides` over the defaults and validates the result.
    ///
    /// `null` yields the defaults. Color strings that fail to parse fall back
    /// to the default color for that key.
    pub fn resolve(overrides: &Value) -> Result<Self, ConfigError> {
        if !(overrides.is_object() || overrides.is_null()) {
            return Err(ConfigError::NotAnObject);
        }
        let defaults = serde_json::to_value(Self::default())?;
        let mut merged = defaults.clone();
        merge(&mut merged, overrides);
        if let (Some(colors), Some(fallback)) = (
            merged.get_mut("colors").and_then(Value::as_object_mut),
            defaults.get("colors").and_then(Value::as_object),
        ) {
            repair_colors(colors, fallback);
        }
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the rest of the timeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(first) = self.zoom_levels.first() else {
            return Err(ConfigError::NoZoomLevels);
        };
        if !(first.pixels_per_year.is_finite() && first.pixels_per_year > 0.0) {
            return Err(ConfigError::NonPositiveDensity { id: first.id });
        }
        for pair in self.zoom_levels.windows(2) {
            let next = &pair[1];
            if !(next.pixels_per_year.is_finite() && next.pixels_per_year > 0.0) {
                return Err(ConfigError::NonPositiveDensity { id: next.id });
            }
            if next.pixels_per_year <= pair[0].pixels_per_year {
                return Err(ConfigError::UnorderedZoomLevels { id: next.id });
            }
        }
        if self.event_max_stack == 0 {
            return Err(ConfigError::ZeroMaxStack);
        }
        if self.wheel_zoom_ticks == 0 {
            return Err(ConfigError::ZeroWheelTicks);
        }
        for (name, value) in [
            ("eventBarHeight", self.event_bar_height),
            ("eventBarSpacing", self.event_bar_spacing),
            ("eventBarWidth", self.event_bar_width),
            ("hitMargin", self.hit_margin),
            ("clickSettleThreshold", self.click_settle_threshold),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidMetric(name));
            }
        }
        if let Some(minutes) = self.utc_offset_minutes {
            if FixedOffset::east_opt(minutes.saturating_mul(60)).is_none() {
                return Err(ConfigError::InvalidUtcOffset(minutes));
            }
        }
        Ok(())
    }

    /// The offset calendar boundaries are computed in.
    #[must_use]
    pub fn calendar_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .and_then(|m| FixedOffset::east_opt(m.saturating_mul(60)))
            .unwrap_or_else(|| *Local::now().offset())
    }

    /// Display name for the tier with the given id.
    #[must_use]
    pub fn tier_name(&self, id: u32) -> String {
        let key = format!("zoomLevel{id}");
        self.translations.get(&key).to_owned()
    }
}

/// Recursively merges `overlay` into `base`. Objects merge per key; anything
/// else replaces.
fn merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay.clone(),
    }
}

fn repair_colors(colors: &mut Map<String, Value>, fallback: &Map<String, Value>) {
    for (key, value) in colors.iter_mut() {
        let valid = value.as_str().and_then(HexColor::parse).is_some();
        if valid {
            continue;
        }
        if let Some(default) = fallback.get(key) {
            tracing::warn!(color = %key, value = %value, "unparsable color, using default");
            *value = default.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_overrides_yield_defaults() {
        let config = Config::resolve(&Value::Null).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.zoom_levels.len(), 4);
        assert_eq!(config.wheel_zoom_ticks, 4);
    }

    #[test]
    fn nested_objects_merge_per_key() {
        let config = Config::resolve(&json!({
            "colors": { "ruler": "#000000" },
            "layout": { "monthLabelOffset": 30 },
            "translations": { "now": "Şimdi" },
        }))
        .unwrap();
        assert_eq!(config.colors.ruler, HexColor::rgb(0, 0, 0));
        assert_eq!(config.colors.background, Colors::default().background);
        assert_eq!(config.layout.month_label_offset, 30.0);
        assert_eq!(config.layout.event_bar_base_y, -60.0);
        assert_eq!(config.translations.get("now"), "Şimdi");
        assert_eq!(config.translations.get("today"), "Today");
        assert_eq!(config.translations.month(3), "March");
    }

    #[test]
    fn arrays_replace_wholesale() {
        let config = Config::resolve(&json!({
            "zoomLevels": [
                { "id": 7, "pixelsPerYear": 50 },
                { "id": 8, "pixelsPerYear": 500, "showMonths": true },
            ],
            "translations": { "months": { "short": ["J"] } },
        }))
        .unwrap();
        assert_eq!(config.zoom_levels.len(), 2);
        assert_eq!(config.zoom_levels[1], ZoomTier::months(8, 500.0));
        assert_eq!(config.translations.months.short, ["J"]);
        assert_eq!(config.translations.months.full.len(), 12);
        assert_eq!(config.translations.month_short(2), "months.short");
    }

    #[test]
    fn bad_colors_fall_back_per_key() {
        let config = Config::resolve(&json!({
            "colors": { "text": "not a color", "eventBar": 12, "todayMarker": "rgb(1, 2, 3)" },
        }))
        .unwrap();
        assert_eq!(config.colors.text, Colors::default().text);
        assert_eq!(config.colors.event_bar, Colors::default().event_bar);
        assert_eq!(config.colors.today_marker, HexColor::rgb(1, 2, 3));
    }

    #[test]
    fn rejects_unusable_tables() {
        assert!(matches!(
            Config::resolve(&json!({ "zoomLevels": [] })),
            Err(ConfigError::NoZoomLevels)
        ));
        assert!(matches!(
            Config::resolve(&json!({ "zoomLevels": [{ "id": 1, "pixelsPerYear": 0 }] })),
            Err(ConfigError::NonPositiveDensity { id: 1 })
        ));
        assert!(matches!(
            Config::resolve(&json!({ "zoomLevels": [
                { "id": 1, "pixelsPerYear": 100 },
                { "id": 2, "pixelsPerYear": 100 },
            ] })),
            Err(ConfigError::UnorderedZoomLevels { id: 2 })
        ));
        assert!(matches!(
            Config::resolve(&json!({ "eventMaxStack": 0 })),
            Err(ConfigError::ZeroMaxStack)
        ));
        assert!(matches!(
            Config::resolve(&json!({ "wheelZoomTicks": 0 })),
            Err(ConfigError::ZeroWheelTicks)
        ));
        assert!(matches!(
            Config::resolve(&json!({ "hitMargin": -1 })),
            Err(ConfigError::InvalidMetric("hitMargin"))
        ));
        assert!(matches!(
            Config::resolve(&json!({ "utcOffsetMinutes": 100_000 })),
            Err(ConfigError::InvalidUtcOffset(100_000))
        ));
        assert!(matches!(
            Config::resolve(&json!([1, 2])),
            Err(ConfigError::NotAnObject)
        ));
        assert!(matches!(
            Config::resolve(&json!({ "wheelZoomTicks": "four" })),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn missing_translation_returns_key() {
        let config = Config::default();
        assert_eq!(config.translations.get("zoomLevel9"), "zoomLevel9");
        assert_eq!(config.tier_name(3), "Days");
        assert_eq!(config.tier_name(12), "zoomLevel12");
        assert_eq!(config.translations.month(0), "months.full");
        assert_eq!(config.translations.month(13), "months.full");
    }

    #[test]
    fn fixed_offset_is_honored() {
        let config = Config::resolve(&json!({ "utcOffsetMinutes": 180 })).unwrap();
        assert_eq!(config.calendar_offset().local_minus_utc(), 3 * 3600);
    }

    #[test]
    fn colors_round_trip_as_hex() {
        let value = serde_json::to_value(Colors::default()).unwrap();
        assert_eq!(value["todayMarker"], "#E53935");
    }
}
