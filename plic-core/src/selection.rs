//! Selected day and open event, kept in sync with the page URL.
//!
//! `SelectionState` is a plain value. The URL is only touched at two points:
//! `restore` reads it once on load, `commit` writes it after every user
//! action. Four query parameters are owned here: `year`, `month` (1-12),
//! `day` and `eventId`; any others are left as they are.

use tracing::debug;
use url::{Url, form_urlencoded};

use crate::calendar_day::CalendarDay;
use crate::event::Event;
use crate::event_id::{EventId, identify, resolve};

pub const PARAM_YEAR: &str = "year";
pub const PARAM_MONTH: &str = "month";
pub const PARAM_DAY: &str = "day";
pub const PARAM_EVENT_ID: &str = "eventId";

/// An event whose detail view is open, with the day it falls on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEvent {
    pub id: EventId,
    pub day: CalendarDay,
}

impl OpenEvent {
    pub fn of(event: &Event) -> Self {
        OpenEvent {
            id: identify(event),
            day: event.calendar_day(),
        }
    }
}

/// One-shot opening of a detail view requested by the URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AutoOpen {
    /// The URL did not ask for anything
    #[default]
    Idle,
    /// Restored from the URL, not yet acted upon
    Pending(EventId),
    /// Acted upon (or overridden by the user); never fires again
    Consumed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected_date: Option<CalendarDay>,
    pub open_event: Option<OpenEvent>,
    pub auto_open: AutoOpen,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// User picked a day in the calendar.
    pub fn select_date(&mut self, day: CalendarDay) {
        self.selected_date = Some(day);
    }

    /// User opened an event's detail view. The selected day moves to the
    /// event's day so the URL date and the list on screen agree.
    pub fn open(&mut self, event: &Event) {
        let open = OpenEvent::of(event);
        self.selected_date = Some(open.day);
        self.open_event = Some(open);
        self.settle_auto_open();
    }

    /// User closed the detail view. The selected day is kept.
    pub fn close(&mut self) {
        self.open_event = None;
        self.settle_auto_open();
    }

    pub fn open_event_id(&self) -> Option<&EventId> {
        self.open_event.as_ref().map(|open| &open.id)
    }

    /// The selected day, or `today` before anything was selected.
    pub fn selected_or(&self, today: CalendarDay) -> CalendarDay {
        self.selected_date.unwrap_or(today)
    }

    /// The event to open automatically, exactly once after `restore`.
    pub fn take_auto_open(&mut self) -> Option<EventId> {
        match std::mem::take(&mut self.auto_open) {
            AutoOpen::Pending(id) => {
                self.auto_open = AutoOpen::Consumed;
                Some(id)
            }
            other => {
                self.auto_open = other;
                None
            }
        }
    }

    fn settle_auto_open(&mut self) {
        if matches!(self.auto_open, AutoOpen::Pending(_)) {
            self.auto_open = AutoOpen::Consumed;
        }
    }

    /// Write the state into `url`'s query string, in place.
    ///
    /// Mutating the one `Url` is the history *replace*: callers never keep
    /// a trail of previous selections.
    /// - event open: `year/month/day` of the event's day, plus `eventId`
    /// - no event open: `eventId` removed; the selected day (if any) written
    /// - nothing selected: existing date parameters are left alone
    pub fn commit(&self, url: &mut Url) {
        let mut params: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        match (&self.open_event, self.selected_date) {
            (Some(open), _) => {
                set_date(&mut params, open.day);
                set_param(&mut params, PARAM_EVENT_ID, open.id.as_str());
            }
            (None, Some(day)) => {
                set_date(&mut params, day);
                remove_param(&mut params, PARAM_EVENT_ID);
            }
            (None, None) => remove_param(&mut params, PARAM_EVENT_ID),
        }

        if params.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(params.iter());
        }
    }

    /// Rebuild the state from a page URL. Never fails: malformed dates and
    /// unknown ids are dropped.
    pub fn restore<'a, I>(url: &Url, events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        Self::from_params(&params, events)
    }

    /// Like `restore`, from a bare query string (leading `?` optional).
    pub fn restore_query<'a, I>(query: &str, events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self::from_params(&params, events)
    }

    fn from_params<'a, I>(params: &[(String, String)], events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let selected_date = parse_selected_date(params);
        if selected_date.is_none()
            && [PARAM_YEAR, PARAM_MONTH, PARAM_DAY]
                .iter()
                .any(|key| get_param(params, key).is_some())
        {
            debug!(
                year = get_param(params, PARAM_YEAR),
                month = get_param(params, PARAM_MONTH),
                day = get_param(params, PARAM_DAY),
                "Ignoring malformed date in URL"
            );
        }

        let open_event = get_param(params, PARAM_EVENT_ID).and_then(|raw| {
            let Ok(id) = raw.parse::<EventId>() else {
                debug!(event_id = raw, "Ignoring malformed event id in URL");
                return None;
            };

            match resolve(events, &id) {
                Some(event) => Some(OpenEvent {
                    id,
                    day: event.calendar_day(),
                }),
                None => {
                    debug!(event_id = raw, "Event id in URL matches no event");
                    None
                }
            }
        });

        let auto_open = match &open_event {
            Some(open) => AutoOpen::Pending(open.id.clone()),
            None => AutoOpen::Idle,
        };

        SelectionState {
            selected_date: selected_date.or(open_event.as_ref().map(|open| open.day)),
            open_event,
            auto_open,
        }
    }
}

/// All three of `year/month/day` present, all digits, 4-digit year, real date.
fn parse_selected_date(params: &[(String, String)]) -> Option<CalendarDay> {
    let year = get_param(params, PARAM_YEAR)?;
    let month = get_param(params, PARAM_MONTH)?;
    let day = get_param(params, PARAM_DAY)?;

    if year.len() != 4 {
        return None;
    }

    let year = parse_digits(year)?;
    let month = parse_digits(month)?;
    let day = parse_digits(day)?;

    CalendarDay::from_ymd(i32::try_from(year).ok()?, month, day)
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// First value for `key`, like `URLSearchParams.get`.
fn get_param<'p>(params: &'p [(String, String)], key: &str) -> Option<&'p str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Replace the first `key` in place and drop any repeats, or append it.
fn set_param(params: &mut Vec<(String, String)>, key: &str, value: &str) {
    let mut found = false;
    params.retain_mut(|(k, v)| {
        if k != key {
            return true;
        }
        if found {
            return false;
        }
        found = true;
        *v = value.to_string();
        true
    });

    if !found {
        params.push((key.to_string(), value.to_string()));
    }
}

fn remove_param(params: &mut Vec<(String, String)>, key: &str) {
    params.retain(|(k, _)| k != key);
}

fn set_date(params: &mut Vec<(String, String)>, day: CalendarDay) {
    set_param(params, PARAM_YEAR, &day.year().to_string());
    set_param(params, PARAM_MONTH, &day.month().to_string());
    set_param(params, PARAM_DAY, &day.day().to_string());
}
