use anyhow::{Result, anyhow};
use plic_core::{EventId, SelectionState, resolve};
use url::Url;

use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &Context, event_id: &str, from: Option<Url>) -> Result<()> {
    let id: EventId = event_id.parse()?;
    let event = resolve(&ctx.catalog, &id).ok_or_else(|| anyhow!("No event with id '{}'", id))?;

    let mut url = from.unwrap_or_else(|| ctx.base_url.clone());
    let mut selection = SelectionState::restore(&url, &ctx.catalog);
    selection.open(event);
    selection.commit(&mut url);

    println!("{}", event.render());
    println!("{}", url);

    Ok(())
}
