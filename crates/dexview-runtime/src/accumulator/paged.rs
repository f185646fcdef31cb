use dexview_engine::total_pages;
use dexview_providers::RecordStore;
use dexview_types::{ErrorInfo, Record};
use serde::Serialize;
use std::sync::{Arc, Mutex};

use super::{LoadOutcome, SkipReason, lock};
use crate::{Error, Result};

/// Read-only view of a [`PagedAccumulator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedSnapshot {
    pub records: Vec<Record>,
    pub is_loading: bool,
    pub error: Option<ErrorInfo>,
    pub has_more: bool,
    /// Requested page; may differ from `loaded_page` while loading or after a failure
    pub page_index: usize,
    pub loaded_page: Option<usize>,
    /// 0 until the first successful fetch
    pub total_count: usize,
    pub total_pages: usize,
}

#[derive(Debug, Default)]
struct PagedState {
    records: Vec<Record>,
    page_index: usize,
    loaded_page: Option<usize>,
    total_count: Option<usize>,
    loading: bool,
    error: Option<ErrorInfo>,
    generation: u64,
}

impl PagedState {
    fn total_pages(&self, page_size: usize) -> usize {
        self.total_count
            .map_or(0, |count| total_pages(count, page_size))
    }

    /// Measured from the page whose records are held, if any.
    fn has_more(&self, page_size: usize) -> bool {
        let shown = self.loaded_page.unwrap_or(self.page_index);
        shown + 1 < self.total_pages(page_size)
    }
}

pub(crate) struct PageTicket {
    generation: u64,
    index: usize,
}

pub(crate) enum PageStart {
    Start(PageTicket),
    Skip(SkipReason),
}

/// One page at a time; each successful fetch replaces the records.
pub struct PagedAccumulator<S> {
    store: Arc<S>,
    page_size: usize,
    state: Mutex<PagedState>,
}

impl<S: RecordStore> PagedAccumulator<S> {
    /// `page_size` is clamped to at least 1.
    pub fn new(store: Arc<S>, page_size: usize) -> Self {
        Self {
            store,
            page_size: page_size.max(1),
            state: Mutex::new(PagedState::default()),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Show page `index` (0-based).
    ///
    /// No fetch when `index` is already loaded without error or a fetch is
    /// running. Once the total is known, an index past the last page is
    /// rejected with [`Error::PageOutOfRange`].
    pub async fn set_page(&self, index: usize) -> Result<LoadOutcome> {
        match self.begin(index, false)? {
            PageStart::Start(ticket) => Ok(self.run(ticket).await),
            PageStart::Skip(reason) => Ok(LoadOutcome::skipped(reason)),
        }
    }

    /// Fetch the current page again, even if it is loaded.
    pub async fn refetch(&self) -> Result<LoadOutcome> {
        let index = lock(&self.state).page_index;
        match self.begin(index, true)? {
            PageStart::Start(ticket) => Ok(self.run(ticket).await),
            PageStart::Skip(reason) => Ok(LoadOutcome::skipped(reason)),
        }
    }

    /// Drop any in-flight fetch; its result will come back as `Stale`.
    /// The current page falls back to the one whose records are held.
    pub fn invalidate(&self) {
        let mut state = lock(&self.state);
        state.generation += 1;
        state.loading = false;
        state.page_index = state.loaded_page.unwrap_or(0);
    }

    pub fn snapshot(&self) -> PagedSnapshot {
        let state = lock(&self.state);
        let pages = state.total_pages(self.page_size);
        PagedSnapshot {
            records: state.records.clone(),
            is_loading: state.loading,
            error: state.error.clone(),
            has_more: state.has_more(self.page_size),
            page_index: state.page_index,
            loaded_page: state.loaded_page,
            total_count: state.total_count.unwrap_or(0),
            total_pages: pages,
        }
    }

    pub fn has_more(&self) -> bool {
        lock(&self.state).has_more(self.page_size)
    }

    pub fn current_page(&self) -> usize {
        lock(&self.state).page_index
    }

    /// 0 until the first successful fetch.
    pub fn total_pages(&self) -> usize {
        lock(&self.state).total_pages(self.page_size)
    }

    pub fn total_count(&self) -> Option<usize> {
        lock(&self.state).total_count
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub(crate) fn begin(&self, index: usize, force: bool) -> Result<PageStart> {
        let mut state = lock(&self.state);
        if state.loading {
            return Ok(PageStart::Skip(SkipReason::InFlight));
        }
        if !force && state.loaded_page == Some(index) && state.error.is_none() {
            state.page_index = index;
            return Ok(PageStart::Skip(SkipReason::Unchanged));
        }
        if let Some(count) = state.total_count {
            let pages = total_pages(count, self.page_size);
            if index >= pages.max(1) {
                return Err(Error::PageOutOfRange {
                    index,
                    total_pages: pages,
                });
            }
        }

        state.loading = true;
        state.error = None;
        state.page_index = index;
        Ok(PageStart::Start(PageTicket {
            generation: state.generation,
            index,
        }))
    }

    pub(crate) async fn run(&self, ticket: PageTicket) -> LoadOutcome {
        let offset = ticket.index * self.page_size;
        tracing::debug!(page = ticket.index, offset, limit = self.page_size, "fetching page");
        let result = self.store.fetch_loaded_page(self.page_size, offset).await;

        let mut state = lock(&self.state);
        if state.generation != ticket.generation {
            tracing::debug!(page = ticket.index, "discarding stale page result");
            return LoadOutcome::Stale;
        }
        state.loading = false;

        match result {
            Ok(loaded) => {
                let count = loaded.records.len();
                state.records = loaded.records;
                state.total_count = Some(loaded.page.total_count);
                state.loaded_page = Some(ticket.index);
                tracing::info!(
                    page = ticket.index,
                    count,
                    total_count = loaded.page.total_count,
                    "page loaded"
                );
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                let error = ErrorInfo::from_error(&err);
                tracing::warn!(page = ticket.index, error = %error, "page fetch failed");
                state.error = Some(error.clone());
                LoadOutcome::Failed { error }
            }
        }
    }
}
