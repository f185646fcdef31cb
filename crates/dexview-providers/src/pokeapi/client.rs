use dexview_types::{PageResult, Record};
use std::time::Duration;

use super::mapper::map_list;
use super::schema::{ListResponse, PokemonResponse};
use crate::transport::{RetryPolicy, get_json};
use crate::{DetailFetcher, Error, ListFetcher, Result};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Record store backed by the PokeAPI REST endpoints.
#[derive(Debug, Clone)]
pub struct PokeApiStore {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl PokeApiStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> PokeApiStoreBuilder {
        PokeApiStoreBuilder {
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    fn list_url(&self, limit: usize, offset: usize) -> String {
        format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset)
    }

    /// Absolute URLs are used as-is; anything else is treated as an id or name.
    fn detail_url(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_string()
        } else {
            format!("{}/pokemon/{}", self.base_url, reference.trim_matches('/'))
        }
    }
}

pub struct PokeApiStoreBuilder {
    base_url: String,
    retry: RetryPolicy,
    timeout: Duration,
}

impl PokeApiStoreBuilder {
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<PokeApiStore> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::InvalidRequest("empty base URL".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::InvalidRequest(format!("cannot build HTTP client: {}", e)))?;

        Ok(PokeApiStore {
            http,
            base_url,
            retry: self.retry,
        })
    }
}

impl ListFetcher for PokeApiStore {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<PageResult> {
        if limit == 0 {
            return Err(Error::InvalidRequest("limit must be positive".to_string()));
        }

        let url = self.list_url(limit, offset);
        let response: ListResponse = get_json(&self.http, &url, self.retry).await?;
        let page = map_list(response, offset);

        tracing::debug!(
            limit,
            offset,
            total = page.total_count,
            items = page.items.len(),
            has_next = page.has_next(),
            "fetched list page"
        );
        Ok(page)
    }
}

impl DetailFetcher for PokeApiStore {
    async fn fetch_detail(&self, reference: &str) -> Result<Record> {
        let url = self.detail_url(reference);
        let response: PokemonResponse = get_json(&self.http, &url, self.retry).await?;
        Ok(Record::from(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_url_resolution() {
        let store = PokeApiStore::new("https://pokeapi.co/api/v2/").unwrap();
        assert_eq!(store.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(
            store.detail_url("https://pokeapi.co/api/v2/pokemon/25/"),
            "https://pokeapi.co/api/v2/pokemon/25/"
        );
        assert_eq!(store.detail_url("25"), "https://pokeapi.co/api/v2/pokemon/25");
        assert_eq!(
            store.detail_url("pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn test_list_url() {
        let store = PokeApiStore::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            store.list_url(20, 40),
            "https://pokeapi.co/api/v2/pokemon?limit=20&offset=40"
        );
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        assert!(matches!(
            PokeApiStore::new("/"),
            Err(Error::InvalidRequest(_))
        ));
    }
}
