//! Everything a command needs: settings plus the loaded event catalog.

use anyhow::{Context as _, Result};
use chrono_tz::Tz;
use plic_core::config::{EventsSource, PlicConfig};
use plic_core::{CalendarDay, EventCatalog};
use tracing::info;
use url::Url;

/// Command-line values that take precedence over the config file.
pub struct Overrides {
    pub events: Option<String>,
    pub timezone: Option<String>,
}

impl Overrides {
    pub fn apply(&self, mut config: PlicConfig) -> PlicConfig {
        if let Some(events) = &self.events {
            config.events_source = events.clone();
        }
        if let Some(timezone) = &self.timezone {
            config.timezone = timezone.clone();
        }
        config
    }
}

pub struct Context {
    pub today: CalendarDay,
    pub base_url: Url,
    pub catalog: EventCatalog,
}

impl Context {
    pub async fn load(overrides: &Overrides) -> Result<Self> {
        let config = overrides.apply(PlicConfig::load()?);
        let tz = config.timezone()?;
        let base_url = config.base_url()?;

        let catalog = match config.events_source() {
            EventsSource::File(path) => EventCatalog::load(&path, tz)
                .with_context(|| format!("Could not load events from {}", path.display()))?,
            EventsSource::Remote(url) => fetch_catalog(url, tz).await?,
        };

        Ok(Context {
            today: CalendarDay::today(tz),
            base_url,
            catalog,
        })
    }
}

async fn fetch_catalog(url: Url, tz: Tz) -> Result<EventCatalog> {
    info!(%url, "Fetching events");

    let body = reqwest::get(url.clone())
        .await
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("Could not fetch events from {url}"))?
        .text()
        .await
        .with_context(|| format!("Could not read events from {url}"))?;

    let catalog = EventCatalog::from_json(&body, tz)
        .with_context(|| format!("Invalid events document at {url}"))?;

    info!(events = catalog.len(), skipped = catalog.skipped(), "Fetched event catalog");
    Ok(catalog)
}
