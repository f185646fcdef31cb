use crate::args::OutputFormat;
use anyhow::{Context, Result};
use dexview_sdk::types::{Config, ViewMode};
use dexview_sdk::{Client, ClientBuilder};
use std::path::PathBuf;

use crate::views::Palette;

/// What every handler needs: where config lives and how to print.
pub struct HandlerContext {
    pub config_path: PathBuf,
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(explicit_config: Option<&str>, format: OutputFormat) -> Result<Self> {
        let config_path = dexview_sdk::resolve_config_path(explicit_config)
            .context("Failed to resolve config path")?;
        Ok(Self {
            config_path,
            format,
        })
    }

    /// File contents (or defaults) with environment overrides applied.
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load_from(&self.config_path)
            .with_context(|| format!("Failed to load {}", self.config_path.display()))?;
        Ok(config.apply_env_overrides())
    }

    pub fn client(&self, mode: ViewMode) -> Result<Client> {
        let client = ClientBuilder::new()
            .config(self.load_config()?)
            .mode(mode)
            .build()?;
        Ok(client)
    }

    pub fn palette(&self) -> Palette {
        Palette::for_stdout()
    }

    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
