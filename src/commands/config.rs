use anyhow::Result;
use owo_colors::OwoColorize;
use plic_core::config::{EventsSource, PlicConfig};

use crate::context::Overrides;

pub fn run(overrides: &Overrides) -> Result<()> {
    let path = PlicConfig::config_path()?;
    let config = overrides.apply(PlicConfig::load()?);

    let source = match config.events_source() {
        EventsSource::File(path) => path.display().to_string(),
        EventsSource::Remote(url) => url.to_string(),
    };

    println!("{} {}", "Config file:".dimmed(), path.display());
    println!("{} {}", "Events:     ".dimmed(), source);
    println!("{} {}", "Time zone:  ".dimmed(), config.timezone()?);
    println!("{} {}", "Base URL:   ".dimmed(), config.base_url()?);

    Ok(())
}
