use anyhow::{Result, bail};
use dexview_sdk::types::{LoadOutcome, ViewMode};

use super::{HandlerContext, apply_filter};
use crate::args::{FilterArgs, OutputFormat};
use crate::views::catalog::{self, CatalogOutput};

/// Print one page. `page` is 1-based, as typed by the user.
pub async fn handle(ctx: &HandlerContext, page: u64, filter: &FilterArgs) -> Result<()> {
    let client = ctx.client(ViewMode::Paged)?;
    apply_filter(&client, filter);

    let index = usize::try_from(page - 1)?;
    let coordinator = client.catalog();
    if let LoadOutcome::Failed { error } = coordinator.set_page(index).await? {
        bail!("Failed to load page {}: {}", page, error);
    }

    // The first fetch is the one that learns the total, so the range
    // check for an explicit page happens afterwards.
    let view = coordinator.snapshot();
    if view.total_pages > 0 && index >= view.total_pages {
        bail!(
            "Page {} is out of range: only {} page(s) available",
            page,
            view.total_pages
        );
    }

    let visible = coordinator.visible();
    match ctx.format {
        OutputFormat::Json => ctx.print_json(&CatalogOutput::new(&view, &visible)),
        OutputFormat::Plain => {
            print!("{}", catalog::render(&view, &visible, ctx.palette()));
            Ok(())
        }
    }
}
