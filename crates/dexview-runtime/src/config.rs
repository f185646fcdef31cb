use crate::{Error, Result};
use dexview_providers::{DEFAULT_BASE_URL, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "DEXVIEW_CONFIG";
/// Environment variable overriding `api_base_url` after loading.
pub const API_URL_ENV: &str = "DEXVIEW_API_URL";

const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DEXVIEW_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (`<config_dir>/dexview/config.toml`)
/// 4. ~/.dexview/config.toml (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("dexview").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".dexview").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// User-tunable settings for the record store and view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    /// Records per page, and per incremental batch
    pub page_size: usize,
    /// Extra transport attempts for 5xx and connection failures
    pub retries: u32,
    pub timeout_secs: u64,
    /// Entries per cache map; 0 disables caching
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 20,
            retries: 2,
            timeout_secs: 10,
            cache_capacity: 256,
        }
    }
}

impl Config {
    /// Load from the resolved default path, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Ok(Self::load_from(&config_path)?.apply_env_overrides())
    }

    /// Defaults when `path` does not exist; malformed files are an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup` (the process environment in
    /// production). Blank values are ignored.
    pub fn apply_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!(api_base_url = %url, "api url overridden from environment");
            self.api_base_url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(Error::Config("api_base_url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retries, RETRY_BACKOFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.retries, 2);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            page_size: 12,
            cache_capacity: 0,
            ..Config::default()
        };
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "page_size = 5\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.page_size, 5);
        assert_eq!(loaded.retries, 2);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "page_size = \"many\"")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_page = Config {
            page_size: 0,
            ..Config::default()
        };
        assert!(zero_page.validate().is_err());

        let blank_url = Config {
            api_base_url: "  ".to_string(),
            ..Config::default()
        };
        assert!(blank_url.validate().is_err());
    }

    #[test]
    fn test_api_url_override() {
        let config = Config::default().apply_overrides_from(|key| {
            (key == API_URL_ENV).then(|| "http://localhost:8000/api/v2".to_string())
        });
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v2");

        let untouched = Config::default().apply_overrides_from(|_| Some(String::new()));
        assert_eq!(untouched.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/dexview-test.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/dexview-test.toml"));
        Ok(())
    }
}
