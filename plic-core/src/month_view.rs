//! Month grid navigation for the heatmap calendar.
//!
//! Weeks start on Monday. Months before the current one cannot be navigated
//! to and their days are disabled, but a restored selection in the past is
//! still displayed.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};

use crate::calendar_day::CalendarDay;
use crate::error::{CoreError, CoreResult};
use crate::heatmap::{HeatTier, Heatmap};

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| YearMonth { first })
    }

    pub fn of(day: CalendarDay) -> Self {
        let date = day.date();
        YearMonth {
            first: date - chrono::Duration::days(i64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> CalendarDay {
        CalendarDay::from(self.first)
    }

    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(*self, |first| YearMonth { first })
    }

    pub fn prev(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(*self, |first| YearMonth { first })
    }

    pub fn days(self) -> impl Iterator<Item = CalendarDay> {
        let month = self.first.month();
        self.first
            .iter_days()
            .take_while(move |date| date.month() == month)
            .map(CalendarDay::from)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

impl FromStr for YearMonth {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map(|first| YearMonth { first })
            .map_err(|_| CoreError::InvalidDate(format!("{s} (expected YYYY-MM)")))
    }
}

/// One day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub day: CalendarDay,
    pub count: usize,
    pub tier: HeatTier,
    pub disabled: bool,
}

/// A week row, Monday first. `None` pads days outside the month.
pub type Week = [Option<Cell>; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    displayed: YearMonth,
    earliest: YearMonth,
}

impl MonthView {
    /// Show the selected day's month, or today's when nothing is selected.
    pub fn new(today: CalendarDay, selected: Option<CalendarDay>) -> Self {
        let earliest = YearMonth::of(today);
        MonthView {
            displayed: selected.map_or(earliest, YearMonth::of),
            earliest,
        }
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn earliest(&self) -> YearMonth {
        self.earliest
    }

    pub fn next(&mut self) {
        self.displayed = self.displayed.next();
    }

    /// Go back a month unless already at the earliest; returns whether it moved.
    pub fn prev(&mut self) -> bool {
        if self.displayed <= self.earliest {
            return false;
        }
        self.displayed = self.displayed.prev();
        true
    }

    /// Jump to a month directly; months before the earliest are refused.
    pub fn show(&mut self, month: YearMonth) -> bool {
        if month < self.earliest {
            return false;
        }
        self.displayed = month;
        true
    }

    /// The display follows a newly selected day.
    pub fn follow(&mut self, day: CalendarDay) {
        self.displayed = YearMonth::of(day);
    }

    /// Days before the first of the current month cannot be selected.
    pub fn is_disabled(&self, day: CalendarDay) -> bool {
        day < self.earliest.first_day()
    }

    pub fn weeks(&self, heatmap: &Heatmap) -> Vec<Week> {
        let leading = self.displayed.first.weekday().num_days_from_monday() as usize;

        let mut slots: Vec<Option<Cell>> = vec![None; leading];
        slots.extend(self.displayed.days().map(|day| {
            let count = heatmap.count(day);
            Some(Cell {
                day,
                count,
                tier: crate::heatmap::tier(count),
                disabled: self.is_disabled(day),
            })
        }));
        while slots.len() % 7 != 0 {
            slots.push(None);
        }

        slots
            .chunks(7)
            .map(|chunk| std::array::from_fn(|i| chunk[i]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::test_support::event_at;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_year_month_navigation() {
        let dec = YearMonth::new(2025, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2026, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
        assert_eq!(YearMonth::of(day(2025, 12, 31)), dec);
        assert_eq!(dec.days().count(), 31);
        assert_eq!(YearMonth::new(2024, 2).unwrap().days().count(), 29);
        assert!(YearMonth::new(2025, 13).is_none());
    }

    #[test]
    fn test_year_month_parse() {
        let month: YearMonth = "2025-06".parse().unwrap();
        assert_eq!((month.year(), month.month()), (2025, 6));
        assert_eq!(month.to_string(), "2025-06");
        assert!("2025-6-1".parse::<YearMonth>().is_err());
        assert!("June".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_prev_stops_at_current_month() {
        let mut view = MonthView::new(day(2025, 6, 15), None);
        assert_eq!(view.displayed(), YearMonth::new(2025, 6).unwrap());
        assert!(!view.prev());

        view.next();
        view.next();
        assert!(view.prev());
        assert_eq!(view.displayed(), YearMonth::new(2025, 7).unwrap());

        assert!(!view.show(YearMonth::new(2025, 5).unwrap()));
        assert!(view.show(YearMonth::new(2025, 9).unwrap()));
    }

    #[test]
    fn test_displays_selected_month() {
        let view = MonthView::new(day(2025, 6, 15), Some(day(2025, 8, 3)));
        assert_eq!(view.displayed(), YearMonth::new(2025, 8).unwrap());

        let mut view = MonthView::new(day(2025, 6, 15), None);
        view.follow(day(2025, 11, 1));
        assert_eq!(view.displayed(), YearMonth::new(2025, 11).unwrap());
    }

    #[test]
    fn test_disabled_days() {
        let view = MonthView::new(day(2025, 6, 15), None);
        assert!(view.is_disabled(day(2025, 5, 31)));
        assert!(!view.is_disabled(day(2025, 6, 1)));
        assert!(!view.is_disabled(day(2025, 6, 14)));
    }

    #[test]
    fn test_weeks_start_on_monday() {
        // June 2025 starts on a Sunday
        let events = vec![
            event_at("A", "V", (2025, 6, 1), (19, 0)),
            event_at("B", "V", (2025, 6, 1), (21, 0)),
            event_at("C", "V", (2025, 6, 30), (19, 0)),
        ];
        let view = MonthView::new(day(2025, 6, 1), None);

        let weeks = view.weeks(&Heatmap::new(&events));

        assert_eq!(weeks.len(), 6);
        assert!(weeks[0][..6].iter().all(Option::is_none));

        let first = weeks[0][6].unwrap();
        assert_eq!(first.day, day(2025, 6, 1));
        assert_eq!(first.count, 2);
        assert_eq!(first.tier, HeatTier::Low);

        let last = weeks[5][0].unwrap();
        assert_eq!(last.day, day(2025, 6, 30));
        assert!(weeks[5][1..].iter().all(Option::is_none));
    }

    #[test]
    fn test_weeks_exact_fit() {
        // February 2027 starts on a Monday and has 28 days
        let view = MonthView::new(day(2027, 2, 10), None);
        let weeks = view.weeks(&Heatmap::default());

        assert_eq!(weeks.len(), 4);
        assert!(weeks.iter().flatten().all(Option::is_some));
        assert!(!weeks[0][0].unwrap().disabled);
        assert_eq!(weeks[3][6].unwrap().day, day(2027, 2, 28));
    }

    #[test]
    fn test_weeks_of_past_selection_are_disabled() {
        let view = MonthView::new(day(2027, 3, 10), Some(day(2027, 2, 10)));
        let weeks = view.weeks(&Heatmap::default());

        assert!(weeks.iter().flatten().flatten().all(|cell| cell.disabled));
    }
}
