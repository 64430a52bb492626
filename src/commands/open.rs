use anyhow::{Context as _, Result};
use plic_core::{SelectionState, resolve};
use url::Url;

use crate::commands::events::print_day;
use crate::context::Context;
use crate::render::render_detail;

/// Show what a shared link points at. Links to events that are no longer
/// listed fall back to the linked day.
pub fn run(ctx: &Context, url: &Url, browser: bool) -> Result<()> {
    let mut selection = SelectionState::restore(url, &ctx.catalog);

    let Some(event) = selection
        .take_auto_open()
        .and_then(|id| resolve(&ctx.catalog, &id))
    else {
        print_day(ctx, selection.selected_or(ctx.today));
        return Ok(());
    };

    println!("{}", render_detail(event));

    if browser {
        ::open::that(&event.url).with_context(|| format!("Could not open {}", event.url))?;
    }

    Ok(())
}
