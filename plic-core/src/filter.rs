//! The event list shown under the calendar.

use crate::calendar_day::CalendarDay;
use crate::event::Event;

/// Events on `selected` (local day), in input order. No date means no filter.
///
/// This is a stable filter, not a sort: the supplier already orders events
/// chronologically, and events sharing a start time keep their relative order.
pub fn visible_events<'a, I>(events: I, selected: Option<CalendarDay>) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| selected.is_none_or(|day| event.calendar_day() == day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::test_support::event_at;

    #[test]
    fn test_filters_selected_day_in_order() {
        let events = vec![
            event_at("First", "V", (2025, 6, 1), (18, 0)),
            event_at("Other day", "V", (2025, 6, 2), (18, 0)),
            event_at("Second", "V", (2025, 6, 1), (20, 0)),
        ];
        let day = CalendarDay::from_ymd(2025, 6, 1);

        let titles: Vec<_> = visible_events(&events, day)
            .into_iter()
            .map(|e| e.title.as_str())
            .collect();

        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_keeps_input_order_for_same_start() {
        // Deliberately not sorted: the filter must not reorder
        let events = vec![
            event_at("Late", "V", (2025, 6, 1), (21, 0)),
            event_at("Tie B", "V", (2025, 6, 1), (19, 0)),
            event_at("Tie A", "V", (2025, 6, 1), (19, 0)),
        ];

        let titles: Vec<_> = visible_events(&events, CalendarDay::from_ymd(2025, 6, 1))
            .into_iter()
            .map(|e| e.title.as_str())
            .collect();

        assert_eq!(titles, vec!["Late", "Tie B", "Tie A"]);
    }

    #[test]
    fn test_no_selection_passes_everything() {
        let events = vec![
            event_at("A", "V", (2025, 6, 1), (18, 0)),
            event_at("B", "V", (2025, 7, 1), (18, 0)),
        ];

        assert_eq!(visible_events(&events, None).len(), 2);
    }

    #[test]
    fn test_empty_day() {
        let events = vec![event_at("A", "V", (2025, 6, 1), (18, 0))];

        assert!(visible_events(&events, CalendarDay::from_ymd(2025, 6, 3)).is_empty());
    }
}
