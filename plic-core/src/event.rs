//! Cultural event types.
//!
//! `EventRecord` is the shape of the published `events.json` produced by the
//! scrapers. `Event` is the same record with its date resolved to an instant
//! in the calendar time zone, which is what every core operation works with.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calendar_day::CalendarDay;
use crate::error::{CoreError, CoreResult};

/// Naive (zone-less) date-time layouts accepted in `events.json`.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Music,
    Theatre,
    Culture,
}

impl Category {
    /// Label shown on event cards.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Music => "Muzică",
            Category::Theatre => "Teatru",
            Category::Culture => "Cultură",
        }
    }
}

/// Where an event's description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionSource {
    Scraped,
    Ai,
}

/// An event as published in `events.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    pub venue: String,
    /// ISO 8601, with or without an offset, or a bare date
    pub date: String,
    pub url: String,
    #[serde(default)]
    pub source: String,
    pub category: Category,
    #[serde(default)]
    pub price: Option<String>,

    // Spotify match for music events
    #[serde(default)]
    pub spotify_match: bool,
    #[serde(default)]
    pub spotify_url: Option<String>,

    // Enrichment for theatre/culture events
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_source: Option<DescriptionSource>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl EventRecord {
    /// Resolve the record's date in `tz`, producing an `Event`.
    pub fn into_event(self, tz: Tz) -> CoreResult<Event> {
        let date = parse_event_date(&self.date, tz)?;

        Ok(Event {
            title: self.title,
            artist: self.artist,
            venue: self.venue,
            date,
            url: self.url,
            source: self.source,
            category: self.category,
            price: self.price,
            spotify_match: self.spotify_match,
            spotify_url: self.spotify_url,
            description: self.description,
            description_source: self.description_source,
            image_url: self.image_url,
            video_url: self.video_url,
        })
    }
}

/// A cultural event with its date resolved to an instant in the calendar zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub artist: Option<String>,
    pub venue: String,
    /// Midnight means "no specific time"
    pub date: DateTime<Tz>,
    pub url: String,
    pub source: String,
    pub category: Category,
    pub price: Option<String>,
    pub spotify_match: bool,
    pub spotify_url: Option<String>,
    pub description: Option<String>,
    pub description_source: Option<DescriptionSource>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

impl Event {
    /// The local calendar day the event falls on.
    pub fn calendar_day(&self) -> CalendarDay {
        CalendarDay::of(&self.date)
    }

    /// Milliseconds since the Unix epoch.
    pub fn instant_millis(&self) -> i64 {
        self.date.timestamp_millis()
    }

    /// Whether the event has a start time, as opposed to just a day.
    pub fn has_time(&self) -> bool {
        self.date.hour() != 0 || self.date.minute() != 0
    }

    /// Local start time as `HH:MM`, or `None` when the event has no specific time.
    pub fn time_label(&self) -> Option<String> {
        self.has_time().then(|| self.date.format("%H:%M").to_string())
    }

    /// Only theatre and culture events with some enrichment get a detail view.
    pub fn has_details(&self) -> bool {
        let enriched =
            self.description.is_some() || self.image_url.is_some() || self.video_url.is_some();

        matches!(self.category, Category::Theatre | Category::Culture) && enriched
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.artist {
            Some(artist) => write!(f, "{} ({}) @ {}", self.title, artist, self.venue),
            None => write!(f, "{} @ {}", self.title, self.venue),
        }
    }
}

/// Parse an `events.json` date string into an instant in `tz`.
///
/// - with an offset (`2025-06-01T19:00:00+03:00`): that instant
/// - without one (`2025-06-01T19:00:00`): wall-clock time in `tz`
/// - a bare date (`2025-06-01`): local midnight
pub fn parse_event_date(raw: &str, tz: Tz) -> CoreResult<DateTime<Tz>> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return localize(naive, tz, raw);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return localize(date.and_time(NaiveTime::MIN), tz, raw);
    }

    Err(CoreError::InvalidEventDate(raw.to_string()))
}

/// Wall-clock time in `tz`. Repeated hours (DST fall-back) resolve to the
/// earlier instant; skipped hours (DST spring-forward) are rejected.
fn localize(naive: NaiveDateTime, tz: Tz, raw: &str) -> CoreResult<DateTime<Tz>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| CoreError::InvalidEventDate(raw.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono_tz::Europe::Bucharest;

    /// A music event at a local Bucharest wall-clock time.
    pub(crate) fn event_at(
        title: &str,
        venue: &str,
        (y, m, d): (i32, u32, u32),
        (h, min): (u32, u32),
    ) -> Event {
        Event {
            title: title.to_string(),
            artist: None,
            venue: venue.to_string(),
            date: Bucharest.with_ymd_and_hms(y, m, d, h, min, 0).unwrap(),
            url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
            source: "test".to_string(),
            category: Category::Music,
            price: None,
            spotify_match: false,
            spotify_url: None,
            description: None,
            description_source: None,
            image_url: None,
            video_url: None,
        }
    }
}
