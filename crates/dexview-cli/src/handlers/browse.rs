use anyhow::{Result, bail};
use dexview_sdk::types::{LoadOutcome, ViewMode};

use super::{HandlerContext, apply_filter};
use crate::args::{FilterArgs, OutputFormat};
use crate::views::catalog::{self, CatalogOutput};

pub async fn handle(ctx: &HandlerContext, batches: u64, filter: &FilterArgs) -> Result<()> {
    let client = ctx.client(ViewMode::Incremental)?;
    apply_filter(&client, filter);
    let coordinator = client.catalog();

    let mut outcome = coordinator.initialize().await?;
    let mut loaded = 1;
    while loaded < batches && outcome.error().is_none() && coordinator.has_more() {
        outcome = coordinator.load_more().await?;
        loaded += 1;
    }
    if let LoadOutcome::Failed { error } = outcome {
        bail!("Failed to load batch {}: {}", loaded, error);
    }
    tracing::debug!(batches = loaded, "browse finished");

    let view = coordinator.snapshot();
    let visible = coordinator.visible();
    match ctx.format {
        OutputFormat::Json => ctx.print_json(&CatalogOutput::new(&view, &visible)),
        OutputFormat::Plain => {
            print!("{}", catalog::render(&view, &visible, ctx.palette()));
            Ok(())
        }
    }
}
