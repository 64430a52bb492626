use anyhow::Result;
use owo_colors::OwoColorize;
use plic_core::{CalendarDay, SelectionState, resolve, visible_events};
use url::Url;

use crate::context::Context;
use crate::render::{Render, render_day_header, render_detail};

pub fn run(ctx: &Context, date: Option<CalendarDay>, link: Option<&Url>) -> Result<()> {
    let mut selection = match link {
        Some(url) => SelectionState::restore(url, &ctx.catalog),
        None => SelectionState::new(),
    };
    if let Some(date) = date {
        selection.select_date(date);
    }

    print_day(ctx, selection.selected_or(ctx.today));

    // A shared link that names an event opens it once
    if let Some(event) = selection
        .take_auto_open()
        .and_then(|id| resolve(&ctx.catalog, &id))
    {
        println!();
        println!("{}", render_detail(event));
    }

    Ok(())
}

/// Print the list of events on `day`.
pub fn print_day(ctx: &Context, day: CalendarDay) {
    let events = visible_events(&ctx.catalog, Some(day));

    println!("{}", render_day_header(day, events.len()));

    if events.is_empty() {
        println!("{}", "   No events".dimmed());
        return;
    }

    for event in events {
        println!("  {}", event.render());
    }
}
