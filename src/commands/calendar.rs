use anyhow::Result;
use plic_core::month_view::{MonthView, YearMonth};
use plic_core::{CalendarDay, Heatmap, SelectionState};

use crate::context::Context;
use crate::render::render_month;

pub fn run(ctx: &Context, month: Option<YearMonth>, date: Option<CalendarDay>) -> Result<()> {
    let mut selection = SelectionState::new();
    selection.select_date(date.unwrap_or(ctx.today));

    let mut view = MonthView::new(ctx.today, selection.selected_date);
    if let Some(month) = month {
        anyhow::ensure!(
            view.show(month),
            "Cannot show {}: the calendar starts at {}",
            month,
            view.earliest()
        );
    }

    let heatmap = Heatmap::new(&ctx.catalog);
    println!("{}", render_month(&view, &heatmap, selection.selected_date));

    Ok(())
}
