//! plic configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::calendar_day::{DEFAULT_TIMEZONE, parse_timezone};
use crate::error::{CoreError, CoreResult};

static DEFAULT_EVENTS_SOURCE: &str = "~/.local/share/plic/events.json";
static DEFAULT_BASE_URL: &str = "http://localhost:3000/";

fn default_events_source() -> String {
    DEFAULT_EVENTS_SOURCE.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Configuration at ~/.config/plic/config.toml
///
/// Every field can be overridden with a `PLIC_`-prefixed environment
/// variable, e.g. `PLIC_TIMEZONE=local`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlicConfig {
    /// Path or http(s) URL of the published events.json
    #[serde(default = "default_events_source")]
    pub events_source: String,

    /// IANA zone that defines calendar days, or "local"
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Page URL that shareable links are built on
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for PlicConfig {
    fn default() -> Self {
        PlicConfig {
            events_source: default_events_source(),
            timezone: default_timezone(),
            base_url: default_base_url(),
        }
    }
}

/// Where the event catalog comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum EventsSource {
    File(PathBuf),
    Remote(Url),
}

impl EventsSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        let remote = (raw.starts_with("http://") || raw.starts_with("https://"))
            .then(|| Url::parse(raw).ok())
            .flatten();

        match remote {
            Some(url) => EventsSource::Remote(url),
            None => EventsSource::File(PathBuf::from(shellexpand::tilde(raw).into_owned())),
        }
    }
}

impl PlicConfig {
    pub fn config_path() -> CoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CoreError::Config("Could not determine config directory".into()))?
            .join("plic");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default file on first run.
    pub fn load() -> CoreResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CoreResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("PLIC"))
            .build()
            .map_err(|e| CoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn timezone(&self) -> CoreResult<Tz> {
        parse_timezone(&self.timezone)
    }

    pub fn base_url(&self) -> CoreResult<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| CoreError::Config(format!("Invalid base_url '{}': {e}", self.base_url)))
    }

    pub fn events_source(&self) -> EventsSource {
        EventsSource::parse(&self.events_source)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CoreResult<()> {
        let contents = format!(
            "\
# plic configuration

# Published events.json (path or http(s) URL):
# events_source = \"{}\"

# Time zone that defines calendar days (IANA name, or \"local\"):
# timezone = \"{}\"

# Page that shareable links point to:
# base_url = \"{}\"
",
            DEFAULT_EVENTS_SOURCE, DEFAULT_TIMEZONE, DEFAULT_BASE_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
