//! Bounded keyed cache in front of any record store.
//!
//! Pages are keyed by `(limit, offset)` and records by reference. Both maps
//! use LRU eviction. Failures are never cached. A capacity of zero turns the
//! wrapper into a pass-through.

use dexview_types::{PageResult, Record};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{DetailFetcher, ListFetcher, Result};

/// Hit/miss counters across both maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub pages: usize,
    pub records: usize,
    pub capacity: usize,
}

pub struct CachedStore<S> {
    inner: S,
    pages: Option<Mutex<LruCache<(usize, usize), PageResult>>>,
    records: Option<Mutex<LruCache<String, Record>>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<S> CachedStore<S> {
    /// Wrap `inner`, keeping at most `capacity` pages and `capacity` records.
    pub fn new(inner: S, capacity: usize) -> Self {
        let capacity_nz = NonZeroUsize::new(capacity);
        Self {
            inner,
            pages: capacity_nz.map(|c| Mutex::new(LruCache::new(c))),
            records: capacity_nz.map(|c| Mutex::new(LruCache::new(c))),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            pages: self.pages.as_ref().map_or(0, |m| lock(m).len()),
            records: self.records.as_ref().map_or(0, |m| lock(m).len()),
            capacity: self.capacity,
        }
    }

    /// Drop every cached page and record.
    pub fn clear(&self) {
        if let Some(pages) = &self.pages {
            lock(pages).clear();
        }
        if let Some(records) = &self.records {
            lock(records).clear();
        }
    }

    fn cached_page(&self, key: (usize, usize)) -> Option<PageResult> {
        let hit = lock(self.pages.as_ref()?).get(&key).cloned();
        self.count(hit.is_some());
        hit
    }

    fn cached_record(&self, reference: &str) -> Option<Record> {
        let hit = lock(self.records.as_ref()?).get(reference).cloned();
        self.count(hit.is_some());
        hit
    }

    fn count(&self, hit: bool) {
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: ListFetcher> ListFetcher for CachedStore<S> {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<PageResult> {
        if let Some(page) = self.cached_page((limit, offset)) {
            tracing::debug!(limit, offset, "page cache hit");
            return Ok(page);
        }

        let page = self.inner.fetch_page(limit, offset).await?;
        if let Some(pages) = &self.pages {
            lock(pages).put((limit, offset), page.clone());
        }
        Ok(page)
    }
}

impl<S: DetailFetcher> DetailFetcher for CachedStore<S> {
    async fn fetch_detail(&self, reference: &str) -> Result<Record> {
        if let Some(record) = self.cached_record(reference) {
            tracing::debug!(reference, "record cache hit");
            return Ok(record);
        }

        let record = self.inner.fetch_detail(reference).await?;
        if let Some(records) = &self.records {
            lock(records).put(reference.to_string(), record.clone());
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use dexview_types::RecordSummary;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct CountingStore {
        list_calls: AtomicUsize,
        detail_calls: AtomicUsize,
        fail_details: bool,
    }

    impl ListFetcher for CountingStore {
        async fn fetch_page(&self, limit: usize, offset: usize) -> Result<PageResult> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(PageResult {
                total_count: 100,
                next_cursor: None,
                items: (offset..offset + limit)
                    .map(|i| RecordSummary::new(format!("r{}", i), i.to_string()))
                    .collect(),
            })
        }
    }

    impl DetailFetcher for CountingStore {
        async fn fetch_detail(&self, reference: &str) -> Result<Record> {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_details {
                return Err(Error::network(reference, "HTTP 503"));
            }
            let id: u32 = reference.parse().unwrap_or(0);
            Ok(Record::new(id, format!("r{}", id)))
        }
    }

    #[tokio::test]
    async fn test_page_cache_hits_skip_inner_store() {
        let store = CachedStore::new(CountingStore::default(), 8);

        let first = store.fetch_page(5, 0).await.unwrap();
        let second = store.fetch_page(5, 0).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.inner().list_calls.load(Ordering::SeqCst), 1);
        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.pages, 1);
    }

    #[tokio::test]
    async fn test_capacity_bounds_entries() {
        let store = CachedStore::new(CountingStore::default(), 2);
        for id in ["1", "2", "3"] {
            store.fetch_detail(id).await.unwrap();
        }
        assert_eq!(store.stats().records, 2);

        // "1" was evicted
        store.fetch_detail("1").await.unwrap();
        assert_eq!(store.inner().detail_calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let inner = CountingStore {
            fail_details: true,
            ..Default::default()
        };
        let store = CachedStore::new(inner, 4);

        assert!(store.fetch_detail("7").await.is_err());
        assert!(store.fetch_detail("7").await.is_err());
        assert_eq!(store.inner().detail_calls.load(Ordering::SeqCst), 2);
        assert_eq!(store.stats().records, 0);
    }

    #[tokio::test]
    async fn test_zero_capacity_is_pass_through() {
        let store = CachedStore::new(CountingStore::default(), 0);
        assert!(!store.is_enabled());

        store.fetch_page(3, 0).await.unwrap();
        store.fetch_page(3, 0).await.unwrap();
        assert_eq!(store.inner().list_calls.load(Ordering::SeqCst), 2);
        assert_eq!(store.stats(), CacheStats::default());
    }

    #[tokio::test]
    async fn test_clear_drops_entries() {
        let store = CachedStore::new(CountingStore::default(), 4);
        store.fetch_page(2, 0).await.unwrap();
        store.fetch_detail("1").await.unwrap();
        store.clear();

        let stats = store.stats();
        assert_eq!(stats.pages, 0);
        assert_eq!(stats.records, 0);
    }
}
