use anyhow::Result;
use dexview_sdk::types::ViewMode;

use super::HandlerContext;
use crate::args::OutputFormat;
use crate::views::detail;

pub async fn handle(ctx: &HandlerContext, id: &str) -> Result<()> {
    let client = ctx.client(ViewMode::Paged)?;
    let record = client.record(id).await?;

    match ctx.format {
        OutputFormat::Json => ctx.print_json(&record),
        OutputFormat::Plain => {
            print!("{}", detail::render(&record, ctx.palette()));
            Ok(())
        }
    }
}
