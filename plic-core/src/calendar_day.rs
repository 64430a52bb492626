//! Calendar days and the calendar time zone.
//!
//! Bucketing, filtering and URL dates all work at day granularity in one
//! explicit zone: the venue-local zone of the city the catalog covers, unless
//! configured otherwise.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{CoreError, CoreResult};

/// Zone used when none is configured (all catalogued venues are in Bucharest).
pub const DEFAULT_TIMEZONE: &str = "Europe/Bucharest";

/// Config value that selects the host's own zone.
pub const LOCAL_TIMEZONE: &str = "local";

/// A date at day granularity, in the calendar time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Returns `None` when the triple is not a real calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDay)
    }

    /// The calendar day an instant falls on, in the instant's own zone.
    pub fn of<T: TimeZone>(instant: &DateTime<T>) -> Self {
        CalendarDay(instant.date_naive())
    }

    pub fn today(tz: Tz) -> Self {
        Self::of(&Utc::now().with_timezone(&tz))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-indexed month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        CalendarDay(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDay {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(CalendarDay)
            .map_err(|_| CoreError::InvalidDate(s.to_string()))
    }
}

/// Resolve a configured zone name: an IANA name, or `local` for the host zone.
pub fn parse_timezone(name: &str) -> CoreResult<Tz> {
    let name = name.trim();

    if name.eq_ignore_ascii_case(LOCAL_TIMEZONE) {
        let host = iana_time_zone::get_timezone()
            .map_err(|e| CoreError::Config(format!("Could not determine local time zone: {e}")))?;
        return host
            .parse::<Tz>()
            .map_err(|_| CoreError::Config(format!("Unsupported local time zone '{host}'")));
    }

    name.parse::<Tz>()
        .map_err(|_| CoreError::Config(format!("Unknown time zone '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Bucharest;

    #[test]
    fn test_of_uses_local_day_near_midnight() {
        // 22:30 UTC is already 01:30 the next day in Bucharest (UTC+3 in summer)
        let instant = Utc.with_ymd_and_hms(2025, 6, 1, 22, 30, 0).unwrap();

        assert_eq!(
            CalendarDay::of(&instant),
            CalendarDay::from_ymd(2025, 6, 1).unwrap()
        );
        assert_eq!(
            CalendarDay::of(&instant.with_timezone(&Bucharest)),
            CalendarDay::from_ymd(2025, 6, 2).unwrap()
        );
    }

    #[test]
    fn test_from_ymd_rejects_impossible_dates() {
        assert!(CalendarDay::from_ymd(2025, 2, 29).is_none());
        assert!(CalendarDay::from_ymd(2025, 13, 1).is_none());
        assert!(CalendarDay::from_ymd(2025, 4, 31).is_none());
        assert!(CalendarDay::from_ymd(2024, 2, 29).is_some());
    }

    #[test]
    fn test_parse_and_display() {
        let day: CalendarDay = "2025-06-01".parse().unwrap();
        assert_eq!(day.year(), 2025);
        assert_eq!(day.month(), 6);
        assert_eq!(day.day(), 1);
        assert_eq!(day.to_string(), "2025-06-01");

        assert!(matches!(
            "01/06/2025".parse::<CalendarDay>(),
            Err(CoreError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone(DEFAULT_TIMEZONE).unwrap(), Bucharest);
        assert_eq!(parse_timezone(" UTC ").unwrap(), chrono_tz::UTC);
        assert!(matches!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(CoreError::Config(_))
        ));
    }
}
