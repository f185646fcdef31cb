use dexview_providers::DetailFetcher;
use dexview_types::{ErrorInfo, Record};
use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::accumulator::{LoadOutcome, SkipReason, lock};
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailSnapshot {
    pub id: Option<u32>,
    pub record: Option<Record>,
    pub is_loading: bool,
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Default)]
struct DetailState {
    id: Option<u32>,
    record: Option<Record>,
    loading: bool,
    error: Option<ErrorInfo>,
    generation: u64,
}

/// Single-record view, fetched by id.
pub struct DetailView<S> {
    store: Arc<S>,
    known_total: Mutex<Option<usize>>,
    state: Mutex<DetailState>,
}

/// Parse a user-supplied record id; `None` unless it is a positive integer.
pub fn parse_record_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

impl<S: DetailFetcher> DetailView<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            known_total: Mutex::new(None),
            state: Mutex::new(DetailState::default()),
        }
    }

    /// Ids above `total` are rejected without fetching.
    pub fn set_known_total(&self, total: Option<usize>) {
        *lock(&self.known_total) = total;
    }

    /// Show the record with id `raw_id`.
    ///
    /// A malformed id, or one past the known total, is [`Error::NotFound`].
    /// Opening a different id while a fetch is running supersedes it.
    pub async fn open(&self, raw_id: &str) -> Result<LoadOutcome> {
        let id = self.validate(raw_id)?;
        let generation = {
            let mut state = lock(&self.state);
            if state.id == Some(id) {
                if state.loading {
                    return Ok(LoadOutcome::skipped(SkipReason::InFlight));
                }
                if state.record.is_some() && state.error.is_none() {
                    return Ok(LoadOutcome::skipped(SkipReason::Unchanged));
                }
            } else {
                state.record = None;
            }
            Self::start(&mut state, id)
        };
        Ok(self.run(id, generation).await)
    }

    /// Fetch the current id again.
    pub async fn retry(&self) -> Result<LoadOutcome> {
        let (id, generation) = {
            let mut state = lock(&self.state);
            let Some(id) = state.id else {
                return Err(Error::InvalidOperation(
                    "retry requires an open record".to_string(),
                ));
            };
            if state.loading {
                return Ok(LoadOutcome::skipped(SkipReason::InFlight));
            }
            (id, Self::start(&mut state, id))
        };
        Ok(self.run(id, generation).await)
    }

    /// Forget the current record; an in-flight fetch comes back `Stale`.
    pub fn close(&self) {
        let mut state = lock(&self.state);
        let generation = state.generation + 1;
        *state = DetailState {
            generation,
            ..DetailState::default()
        };
    }

    pub fn snapshot(&self) -> DetailSnapshot {
        let state = lock(&self.state);
        DetailSnapshot {
            id: state.id,
            record: state.record.clone(),
            is_loading: state.loading,
            error: state.error.clone(),
        }
    }

    fn validate(&self, raw_id: &str) -> Result<u32> {
        let id = parse_record_id(raw_id).ok_or_else(|| Error::NotFound(raw_id.to_string()))?;
        if let Some(total) = *lock(&self.known_total)
            && id as usize > total
        {
            return Err(Error::NotFound(raw_id.to_string()));
        }
        Ok(id)
    }

    fn start(state: &mut DetailState, id: u32) -> u64 {
        state.generation += 1;
        state.id = Some(id);
        state.loading = true;
        state.error = None;
        state.generation
    }

    async fn run(&self, id: u32, generation: u64) -> LoadOutcome {
        tracing::debug!(id, "fetching record detail");
        let result = self.store.fetch_detail(&id.to_string()).await;

        let mut state = lock(&self.state);
        if state.generation != generation {
            tracing::debug!(id, "discarding stale detail result");
            return LoadOutcome::Stale;
        }
        state.loading = false;

        match result {
            Ok(record) => {
                state.record = Some(record);
                LoadOutcome::Loaded { count: 1 }
            }
            Err(err) => {
                let error = ErrorInfo::from_error(&err);
                tracing::warn!(id, error = %error, "detail fetch failed");
                state.error = Some(error.clone());
                LoadOutcome::Failed { error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexview_testing::{FakeStore, fixtures::sample_records};

    fn view(records: usize) -> (Arc<FakeStore>, DetailView<FakeStore>) {
        let store = Arc::new(FakeStore::new(sample_records(records)));
        (store.clone(), DetailView::new(store))
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("25"), Some(25));
        assert_eq!(parse_record_id(" 7 "), Some(7));
        assert_eq!(parse_record_id("0"), None);
        assert_eq!(parse_record_id("-3"), None);
        assert_eq!(parse_record_id("pikachu"), None);
    }

    #[tokio::test]
    async fn test_open_loads_record() {
        let (_, detail) = view(5);
        let outcome = detail.open("4").await.unwrap();
        assert!(outcome.is_loaded());

        let snap = detail.snapshot();
        assert_eq!(snap.id, Some(4));
        assert_eq!(snap.record.map(|r| r.name), Some("charmander".to_string()));
        assert!(!snap.is_loading);
    }

    #[tokio::test]
    async fn test_invalid_ids_never_fetch() {
        let (store, detail) = view(5);
        detail.set_known_total(Some(5));

        assert!(matches!(detail.open("abc").await, Err(Error::NotFound(_))));
        assert!(matches!(detail.open("0").await, Err(Error::NotFound(_))));
        assert!(matches!(detail.open("6").await, Err(Error::NotFound(_))));
        assert_eq!(store.detail_calls(), 0);
    }

    #[tokio::test]
    async fn test_reopening_same_id_is_noop() {
        let (store, detail) = view(5);
        detail.open("2").await.unwrap();
        let again = detail.open("2").await.unwrap();
        assert_eq!(again, LoadOutcome::skipped(SkipReason::Unchanged));
        assert_eq!(store.detail_calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let (store, detail) = view(5);
        store.fail_reference("3");

        let outcome = detail.open("3").await.unwrap();
        assert!(outcome.error().is_some());
        assert!(detail.snapshot().error.is_some());

        store.heal_reference("3");
        assert!(detail.retry().await.unwrap().is_loaded());
        let snap = detail.snapshot();
        assert!(snap.error.is_none());
        assert_eq!(snap.record.map(|r| r.id), Some(3));
    }

    #[tokio::test]
    async fn test_retry_without_open_record() {
        let (_, detail) = view(1);
        assert!(matches!(
            detail.retry().await,
            Err(Error::InvalidOperation(_))
        ));
    }
}
