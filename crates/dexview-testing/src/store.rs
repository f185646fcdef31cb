//! In-memory record store for driving accumulators without a network.
//!
//! References are record ids rendered as strings. Every fetch is counted,
//! list fetches can be held in flight behind a gate, and individual offsets
//! or references can be made to fail.

use dexview_providers::{DetailFetcher, Error, ListFetcher, Result};
use dexview_types::{Cursor, PageResult, Record, RecordSummary};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::Semaphore;

#[derive(Default)]
struct Faults {
    offsets: HashSet<usize>,
    references: HashSet<String>,
    stalled_offsets: HashSet<usize>,
}

/// Scriptable [`ListFetcher`] + [`DetailFetcher`] over a fixed record list.
///
/// # Example
/// ```
/// use dexview_testing::{FakeStore, fixtures};
///
/// let store = FakeStore::new(fixtures::sample_records(3));
/// store.fail_offset(0);
/// assert_eq!(store.list_calls(), 0);
/// ```
pub struct FakeStore {
    records: Vec<Record>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    faults: Mutex<Faults>,
    gate: Option<Semaphore>,
}

impl FakeStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            list_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            faults: Mutex::new(Faults::default()),
            gate: None,
        }
    }

    /// Like [`FakeStore::new`], but every list fetch waits for [`FakeStore::release`].
    pub fn gated(records: Vec<Record>) -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new(records)
        }
    }

    /// Let `n` held (or future) list fetches proceed.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// List fetches started so far, including ones still held at the gate.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    /// Make list fetches at `offset` fail until healed.
    pub fn fail_offset(&self, offset: usize) {
        self.faults().offsets.insert(offset);
    }

    pub fn heal_offset(&self, offset: usize) {
        self.faults().offsets.remove(&offset);
    }

    /// Make detail fetches for `reference` fail until healed.
    pub fn fail_reference(&self, reference: impl Into<String>) {
        self.faults().references.insert(reference.into());
    }

    pub fn heal_reference(&self, reference: &str) {
        self.faults().references.remove(reference);
    }

    /// Answer list fetches at `offset` with a next cursor that does not advance.
    pub fn stall_cursor_at(&self, offset: usize) {
        self.faults().stalled_offsets.insert(offset);
    }

    pub fn clear_faults(&self) {
        *self.faults() = Faults::default();
    }

    fn faults(&self) -> MutexGuard<'_, Faults> {
        self.faults.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn page_at(&self, limit: usize, offset: usize) -> Result<PageResult> {
        let faults = self.faults();
        if faults.offsets.contains(&offset) {
            return Err(Error::network(
                format!("fake://pokemon?limit={}&offset={}", limit, offset),
                "HTTP 503 Service Unavailable",
            ));
        }

        let total = self.records.len();
        let start = offset.min(total);
        let end = offset.saturating_add(limit).min(total);
        let items = self.records[start..end]
            .iter()
            .map(|r| RecordSummary::new(r.name.clone(), r.id.to_string()))
            .collect();

        let next_cursor = if faults.stalled_offsets.contains(&offset) {
            Some(Cursor::at_offset(offset))
        } else if end < total {
            Some(Cursor::at_offset(end))
        } else {
            None
        };

        Ok(PageResult {
            total_count: total,
            next_cursor,
            items,
        })
    }
}

impl ListFetcher for FakeStore {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<PageResult> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if limit == 0 {
            return Err(Error::InvalidRequest("limit must be positive".to_string()));
        }
        if let Some(gate) = &self.gate
            && let Ok(permit) = gate.acquire().await
        {
            permit.forget();
        }
        self.page_at(limit, offset)
    }
}

impl DetailFetcher for FakeStore {
    async fn fetch_detail(&self, reference: &str) -> Result<Record> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.faults().references.contains(reference) {
            return Err(Error::network(reference, "HTTP 500 Internal Server Error"));
        }

        self.records
            .iter()
            .find(|r| r.id.to_string() == reference || r.name == reference)
            .cloned()
            .ok_or_else(|| Error::network(reference, "HTTP 404 Not Found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_records;
    use dexview_providers::RecordStore;

    #[tokio::test]
    async fn test_pages_walk_the_records() {
        let store = FakeStore::new(sample_records(5));

        let first = store.fetch_page(2, 0).await.unwrap();
        assert_eq!(first.total_count, 5);
        assert_eq!(first.next_cursor, Some(Cursor::at_offset(2)));
        assert_eq!(first.references(), vec!["1", "2"]);

        let last = store.fetch_page(2, 4).await.unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_next());

        let beyond = store.fetch_page(2, 10).await.unwrap();
        assert!(beyond.items.is_empty());
        assert_eq!(store.list_calls(), 3);
    }

    #[tokio::test]
    async fn test_injected_failures_heal() {
        let store = FakeStore::new(sample_records(3));
        store.fail_offset(0);
        assert!(store.fetch_page(3, 0).await.is_err());
        store.heal_offset(0);
        assert!(store.fetch_page(3, 0).await.is_ok());

        store.fail_reference("2");
        let err = store.fetch_loaded_page(3, 0).await.unwrap_err();
        assert_eq!(err.target(), Some("2"));
    }

    #[tokio::test]
    async fn test_gate_holds_list_fetches() {
        let store = FakeStore::gated(sample_records(2));
        store.release(1);
        let page = store.fetch_page(1, 0).await.unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_stalled_cursor_repeats_offset() {
        let store = FakeStore::new(sample_records(4));
        store.stall_cursor_at(0);
        let page = store.fetch_page(2, 0).await.unwrap();
        assert_eq!(page.next_cursor, Some(Cursor::start()));
    }
}
