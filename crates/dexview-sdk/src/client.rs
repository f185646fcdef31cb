use std::path::PathBuf;
use std::sync::Arc;

use dexview_providers::{CacheStats, CachedStore, PokeApiStore, RecordStore};
use dexview_runtime::{Config, Coordinator, DetailView, LoadOutcome};
use dexview_types::{Record, ViewMode, ViewState};

use crate::error::{Error, Result};

/// The production record store: PokeAPI over HTTP behind an LRU cache.
pub type HttpStore = CachedStore<PokeApiStore>;

/// Entry point for browsing a catalog.
///
/// Owns one record store and one [`Coordinator`] over it. The store is shared
/// with every [`DetailView`] handed out by [`Client::detail`], so records
/// already fetched for a page are served from cache.
///
/// # Examples
///
/// ```no_run
/// use dexview_sdk::Client;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::connect_default()?;
/// client.catalog().initialize().await?;
/// for record in client.catalog().visible() {
///     println!("{} {}", record.id, record.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client<S = HttpStore> {
    config: Config,
    store: Arc<S>,
    catalog: Coordinator<S>,
}

impl Client<HttpStore> {
    /// Load configuration from the default location (plus environment
    /// overrides) and connect to the configured API.
    pub fn connect_default() -> Result<Self> {
        Self::builder().build()
    }

    /// Connect using an already-loaded configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.store.stats()
    }
}

impl<S: RecordStore> Client<S> {
    /// Wrap any record store. Used by tests and by callers bringing their
    /// own transport.
    pub fn from_store(store: Arc<S>, config: Config) -> Self {
        let catalog = Coordinator::new(store.clone(), config.page_size);
        Self {
            config,
            store,
            catalog,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The view-mode coordinator: actions plus the merged read model.
    pub fn catalog(&self) -> &Coordinator<S> {
        &self.catalog
    }

    /// A fresh detail view, bounded by whatever total the catalog knows.
    pub fn detail(&self) -> DetailView<S> {
        let view = DetailView::new(self.store.clone());
        view.set_known_total(self.catalog.known_total());
        view
    }

    /// Fetch one record by id.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dexview_sdk::Client;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::connect_default()?;
    /// let pikachu = client.record("25").await?;
    /// println!("{} weighs {}", pikachu.name, dexview_sdk::utils::format_weight(pikachu.weight));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn record(&self, raw_id: &str) -> Result<Record> {
        let view = self.detail();
        match view.open(raw_id).await? {
            LoadOutcome::Failed { error } => Err(Error::Fetch(error)),
            _ => view
                .snapshot()
                .record
                .ok_or_else(|| Error::NotFound(format!("record {}", raw_id))),
        }
    }
}

/// Builder for [`Client`].
///
/// # Examples
///
/// ```no_run
/// use dexview_sdk::{Client, types::ViewMode};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::builder()
///     .base_url("http://localhost:8000/api/v2")
///     .page_size(12)
///     .mode(ViewMode::Incremental)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: Option<Config>,
    config_path: Option<PathBuf>,
    base_url: Option<String>,
    page_size: Option<usize>,
    mode: Option<ViewMode>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this configuration instead of loading one from disk.
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from this file (missing file means defaults).
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Initial view mode; Paged when unset.
    pub fn mode(mut self, mode: ViewMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Resolve the configuration that `build` would use.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match (&self.config, &self.config_path) {
            (Some(config), _) => config.clone(),
            (None, Some(path)) => Config::load_from(path)?.apply_env_overrides(),
            (None, None) => Config::load()?,
        };
        if let Some(url) = &self.base_url {
            config.api_base_url = url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn build(self) -> Result<Client<HttpStore>> {
        let config = self.resolve_config()?;
        let http = PokeApiStore::builder(config.api_base_url.clone())
            .retry(config.retry_policy())
            .timeout(config.timeout())
            .build()?;
        let store = Arc::new(CachedStore::new(http, config.cache_capacity));
        tracing::debug!(
            api_base_url = %config.api_base_url,
            page_size = config.page_size,
            cache_capacity = config.cache_capacity,
            "client configured"
        );

        let view = ViewState {
            mode: self.mode.unwrap_or_default(),
            ..ViewState::default()
        };
        let catalog = Coordinator::with_view(store.clone(), config.page_size, view);
        Ok(Client {
            config,
            store,
            catalog,
        })
    }
}
