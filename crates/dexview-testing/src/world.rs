//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated config directory
//! - Writing config files
//! - Pointing the CLI at a chosen (or unreachable) API
//! - Executing the `dexview` binary with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An address nothing listens on; fetches against it fail fast.
pub const UNREACHABLE_API_URL: &str = "http://127.0.0.1:9/api/v2";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use dexview_testing::TestWorld;
///
/// let world = TestWorld::new().unwrap().offline();
/// let result = world.run(&["config", "show"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    format: &'static str,
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("dexview").join("config.toml");
        Ok(Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
            format: "plain",
        })
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path passed to the CLI via `--config`. Not created until written.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write raw TOML to the config path.
    pub fn with_config(self, toml: &str) -> Result<Self> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(self)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point the CLI at an address that refuses connections.
    pub fn offline(self) -> Self {
        self.with_env("DEXVIEW_API_URL", UNREACHABLE_API_URL)
    }

    /// Request JSON output instead of plain text.
    pub fn json(mut self) -> Self {
        self.format = "json";
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--format")
            .arg(self.format)
            .env_remove("DEXVIEW_CONFIG")
            .env_remove("DEXVIEW_API_URL")
            .env_remove("RUST_LOG");

        cmd.current_dir(self.temp_dir.path());
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute the `dexview` binary and capture its output.
    ///
    /// Requires the binary to be built in the cargo target directory,
    /// which `cargo test` does for the workspace.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("dexview")
            .map_err(|e| anyhow::anyhow!("Failed to find dexview binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
