//! Terminal rendering for plic-core types.
//!
//! Extension traits that add coloured output to the core types using
//! owo_colors. The heat colours follow the web calendar's orange scale.

use owo_colors::OwoColorize;
use plic_core::month_view::{Cell, MonthView};
use plic_core::{CalendarDay, Category, Event, HeatTier, Heatmap, identify};

const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

fn heat_rgb(tier: HeatTier) -> Option<(u8, u8, u8)> {
    match tier {
        HeatTier::None => None,
        HeatTier::Low => Some((254, 215, 170)),
        HeatTier::Medium => Some((251, 146, 60)),
        HeatTier::High => Some((249, 115, 22)),
        HeatTier::Max => Some((234, 88, 12)),
    }
}

/// Paint `text` with a tier's background colour.
fn paint(tier: HeatTier, text: &str) -> String {
    match heat_rgb(tier) {
        Some((r, g, b)) if tier == HeatTier::Low => text.on_truecolor(r, g, b).black().to_string(),
        Some((r, g, b)) => text.on_truecolor(r, g, b).white().to_string(),
        None => text.to_string(),
    }
}

/// Legend swatch for a tier, e.g. "  4-7"
impl Render for HeatTier {
    fn render(&self) -> String {
        format!("{} {}", paint(*self, "  "), self.label())
    }
}

impl Render for Category {
    fn render(&self) -> String {
        let label = self.label();
        match self {
            Category::Music => label.truecolor(14, 165, 233).bold().to_string(),
            Category::Theatre => label.truecolor(236, 72, 153).bold().to_string(),
            Category::Culture => label.truecolor(234, 179, 8).bold().to_string(),
        }
    }
}

/// One line of the day list.
impl Render for Event {
    fn render(&self) -> String {
        let time = self.time_label().unwrap_or_default();
        let mut line = format!("{:>5}  {}", time, self.title.bold());

        if let Some(artist) = &self.artist {
            line.push_str(&format!(" {}", artist.dimmed()));
        }
        line.push_str(&format!(" · {} · {}", self.venue, self.category.render()));
        if let Some(price) = &self.price {
            line.push_str(&format!(" · {price}"));
        }

        let id = format!("[{}]", identify(self));
        format!("{} {}", line, id.dimmed())
    }
}

fn render_cell(cell: &Cell, selected: Option<CalendarDay>) -> String {
    let number = format!("{:>2}", cell.day.day());

    if selected == Some(cell.day) {
        number.reversed().bold().to_string()
    } else if cell.disabled {
        number.dimmed().to_string()
    } else {
        paint(cell.tier, &number)
    }
}

/// The month grid with heat colours, followed by the legend.
pub fn render_month(view: &MonthView, heatmap: &Heatmap, selected: Option<CalendarDay>) -> String {
    let month = view.displayed();
    let title = month.first_day().date().format("%B %Y").to_string();

    let mut lines = vec![
        format!("{:^20}", title).bold().to_string(),
        WEEKDAY_HEADER.dimmed().to_string(),
    ];

    for week in view.weeks(heatmap) {
        let cells: Vec<String> = week
            .iter()
            .map(|slot| match slot {
                Some(cell) => render_cell(cell, selected),
                None => "  ".to_string(),
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines.push(String::new());
    let legend: Vec<String> = HeatTier::ALL[1..].iter().map(Render::render).collect();
    lines.push(legend.join("  "));

    lines.join("\n")
}

/// Header above the day list, e.g. "Sun 1 Jun 2025 · 4 events"
pub fn render_day_header(day: CalendarDay, count: usize) -> String {
    let label = day.date().format("%a %-d %b %Y").to_string();
    let events = if count == 1 { "event" } else { "events" };
    format!("{} · {} {}", label.bold(), count, events)
}

/// The detail view of an event.
pub fn render_detail(event: &Event) -> String {
    let mut lines = vec![
        format!("{} {}", event.title.bold(), event.category.render()),
        String::new(),
    ];

    if let Some(artist) = &event.artist {
        lines.push(format!("   {}", artist));
    }

    let when = match event.time_label() {
        Some(time) => format!("{} {}", event.date.format("%a %-d %b %Y"), time),
        None => event.date.format("%a %-d %b %Y").to_string(),
    };
    lines.push(format!("   {} · {}", when, event.venue));

    if let Some(price) = &event.price {
        lines.push(format!("   {}", price));
    }

    if event.has_details() {
        if let Some(description) = &event.description {
            lines.push(String::new());
            lines.push(format!("   {}", description));
        }
        for media in [&event.video_url, &event.image_url].into_iter().flatten() {
            lines.push(format!("   {}", media.dimmed()));
        }
    }

    if let Some(spotify) = event.spotify_url.as_ref().filter(|_| event.spotify_match) {
        lines.push(format!("   Spotify: {}", spotify));
    }

    lines.push(String::new());
    lines.push(format!("   {}", event.url.underline()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Bucharest;
    use plic_core::EventRecord;

    fn event(date: &str, category: &str) -> Event {
        let json = format!(
            r#"{{"title": "Hamlet", "venue": "Teatrul Bulandra", "date": "{date}",
                "url": "https://example.com/hamlet", "category": "{category}",
                "price": "80 lei", "description": "Tragedy in five acts"}}"#
        );
        let record: EventRecord = serde_json::from_str(&json).unwrap();
        record.into_event(Bucharest).unwrap()
    }

    #[test]
    fn test_event_line_shows_time_and_id() {
        let line = event("2025-06-01T19:00:00", "theatre").render();

        assert!(line.contains("19:00"));
        assert!(line.contains("Teatrul Bulandra"));
        assert!(line.contains("[3748v6]"));
    }

    #[test]
    fn test_detail_shows_description_only_when_enriched() {
        assert!(render_detail(&event("2025-06-01T19:00:00", "theatre")).contains("Tragedy"));
        assert!(!render_detail(&event("2025-06-01T19:00:00", "music")).contains("Tragedy"));
    }

    #[test]
    fn test_render_month_has_title_and_legend() {
        let today = CalendarDay::of(&Bucharest.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap());
        let view = MonthView::new(today, None);

        let month = render_month(&view, &Heatmap::default(), Some(today));

        assert!(month.contains("June 2025"));
        assert!(month.contains(WEEKDAY_HEADER));
        assert!(month.contains("12+"));
    }

    #[test]
    fn test_day_header_pluralizes() {
        let day = CalendarDay::from_ymd(2025, 6, 1).unwrap();

        assert!(render_day_header(day, 1).ends_with("1 event"));
        assert!(render_day_header(day, 3).ends_with("3 events"));
    }
}
