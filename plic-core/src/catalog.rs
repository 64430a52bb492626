//! The event collection handed to the core.

use std::path::Path;

use chrono_tz::Tz;
use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};
use crate::event::{Event, EventRecord};

/// Events in supplier order (chronological by convention). Never re-sorted:
/// list order and first-match id resolution both depend on it.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
    skipped: usize,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        EventCatalog { events, skipped: 0 }
    }

    /// Parse a JSON array of event records. Records with an unusable date are
    /// skipped rather than failing the whole catalog.
    pub fn from_json(json: &str, tz: Tz) -> CoreResult<Self> {
        let records: Vec<EventRecord> =
            serde_json::from_str(json).map_err(|e| CoreError::Serialization(e.to_string()))?;

        Ok(Self::from_records(records, tz))
    }

    pub fn from_records(records: Vec<EventRecord>, tz: Tz) -> Self {
        let mut catalog = EventCatalog::default();

        for record in records {
            let title = record.title.clone();
            match record.into_event(tz) {
                Ok(event) => catalog.events.push(event),
                Err(e) => {
                    warn!(%title, error = %e, "Skipping event");
                    catalog.skipped += 1;
                }
            }
        }

        catalog
    }

    pub fn load(path: &Path, tz: Tz) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content, tz)?;

        info!(
            path = %path.display(),
            events = catalog.len(),
            skipped = catalog.skipped,
            "Loaded event catalog"
        );

        Ok(catalog)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of records dropped while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> IntoIterator for &'a EventCatalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_id::{identify, resolve};
    use crate::filter::visible_events;
    use crate::heatmap::Heatmap;
    use crate::{CalendarDay, SelectionState};
    use chrono_tz::Europe::Bucharest;
    use std::io::Write;

    const EVENTS_JSON: &str = r#"[
        {"title": "Hamlet", "artist": null, "venue": "Teatrul Bulandra",
         "date": "2025-06-01T19:00:00", "url": "https://example.com/hamlet",
         "source": "bulandra", "category": "theatre", "price": "80 lei",
         "description": "Tragedy", "descriptionSource": "scraped"},
        {"title": "Broken", "artist": null, "venue": "Nowhere",
         "date": "sometime in June", "url": "https://example.com/broken",
         "source": "test", "category": "culture", "price": null},
        {"title": "Jazz", "artist": "Trio", "venue": "Green Hours",
         "date": "2025-06-01T21:00:00", "url": "https://example.com/jazz",
         "source": "jazzx", "category": "music", "price": null},
        {"title": "Expo", "artist": null, "venue": "MNAC",
         "date": "2025-06-02", "url": "https://example.com/expo",
         "source": "mnac", "category": "culture", "price": null}
    ]"#;

    #[test]
    fn test_from_json_skips_bad_dates_and_keeps_order() {
        let catalog = EventCatalog::from_json(EVENTS_JSON, Bucharest).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.skipped(), 1);

        let titles: Vec<_> = catalog.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Hamlet", "Jazz", "Expo"]);
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        assert!(matches!(
            EventCatalog::from_json("{\"not\": \"an array\"}", Bucharest),
            Err(CoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EVENTS_JSON.as_bytes()).unwrap();

        let catalog = EventCatalog::load(file.path(), Bucharest).unwrap();
        assert_eq!(catalog.len(), 3);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            EventCatalog::load(&missing, Bucharest),
            Err(CoreError::Io(_))
        ));
    }

    #[test]
    fn test_catalog_feeds_the_core() {
        let catalog = EventCatalog::from_json(EVENTS_JSON, Bucharest).unwrap();
        let june_1 = CalendarDay::from_ymd(2025, 6, 1).unwrap();

        let heatmap = Heatmap::new(&catalog);
        assert_eq!(heatmap.count(june_1), 2);
        assert_eq!(heatmap.total(), catalog.len());

        let state = SelectionState::restore_query(
            &format!("year=2025&month=6&day=1&eventId={}", identify(&catalog.events()[1])),
            &catalog,
        );
        let visible = visible_events(&catalog, state.selected_date);
        assert_eq!(visible.len(), 2);

        let open = state.open_event_id().and_then(|id| resolve(&catalog, id)).unwrap();
        assert_eq!(open.title, "Jazz");
    }
}
