use anyhow::{Context, Result, bail};
use dexview_sdk::types::Config;

use super::HandlerContext;
use crate::args::OutputFormat;

/// Print the configuration the other commands would run with.
pub fn show(ctx: &HandlerContext) -> Result<()> {
    let config = ctx.load_config()?;
    match ctx.format {
        OutputFormat::Json => ctx.print_json(&config),
        OutputFormat::Plain => {
            println!("# {}", ctx.config_path.display());
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

pub fn init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default configuration");

    match ctx.format {
        OutputFormat::Json => ctx.print_json(&serde_json::json!({ "path": path })),
        OutputFormat::Plain => {
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}
