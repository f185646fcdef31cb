//! View-mode coordinator.
//!
//! Owns the user's [`ViewState`] and both accumulators, forwards actions to
//! whichever accumulator the current mode selects, and exposes one merged
//! read model. The merge is pure selection; the coordinator holds no fetch
//! state of its own.

use dexview_engine::{RecordFilter, toggle_category, total_pages};
use dexview_providers::RecordStore;
use dexview_types::{ErrorInfo, Record, ViewMode, ViewState};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::accumulator::{
    IncrementalAccumulator, LoadOutcome, PageStart, PagedAccumulator, SkipReason, lock,
};
use crate::{Error, Result};

/// Merged read model handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub mode: ViewMode,
    /// Unfiltered records of the active accumulator
    pub records: Vec<Record>,
    pub is_loading_initial: bool,
    pub is_loading_more: bool,
    pub error: Option<ErrorInfo>,
    pub has_more: bool,
    pub page_index: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

pub struct Coordinator<S> {
    view: Mutex<ViewState>,
    paged: PagedAccumulator<S>,
    incremental: IncrementalAccumulator<S>,
}

impl<S: RecordStore> Coordinator<S> {
    /// Both accumulators share `store` and use `page_size` for pages and batches.
    pub fn new(store: Arc<S>, page_size: usize) -> Self {
        Self::with_view(store, page_size, ViewState::default())
    }

    /// Start from a specific view state instead of the defaults.
    pub fn with_view(store: Arc<S>, page_size: usize, view: ViewState) -> Self {
        Self {
            view: Mutex::new(view),
            paged: PagedAccumulator::new(store.clone(), page_size),
            incremental: IncrementalAccumulator::new(store, page_size),
        }
    }

    /// Activation fetch for the current mode. Idempotent: repeated calls
    /// after a successful load issue no further fetches.
    pub async fn initialize(&self) -> Result<LoadOutcome> {
        let view = self.view_state();
        tracing::debug!(mode = %view.mode, page = view.page_index, "initializing view");
        match view.mode {
            ViewMode::Paged => self.paged.set_page(view.page_index).await,
            ViewMode::Incremental => Ok(self.incremental.initialize().await),
        }
    }

    /// Switch modes.
    ///
    /// Entering Incremental resets it and loads the first batch. Entering
    /// Paged resets `page_index` to 0 and shows page 0, fetching only if it
    /// is not already loaded. Selecting the current mode does nothing.
    pub async fn set_mode(&self, mode: ViewMode) -> Result<LoadOutcome> {
        {
            let mut view = self.lock_view();
            if view.mode == mode {
                return Ok(LoadOutcome::skipped(SkipReason::Unchanged));
            }
            tracing::info!(from = %view.mode, to = %mode, "switching view mode");
            view.mode = mode;
            view.page_index = 0;
        }

        match mode {
            ViewMode::Incremental => {
                self.incremental.reset();
                Ok(self.incremental.load_more().await)
            }
            ViewMode::Paged => {
                if self.paged.is_loading() && self.paged.current_page() != 0 {
                    self.paged.invalidate();
                }
                self.paged.set_page(0).await
            }
        }
    }

    /// Paged mode only.
    pub async fn set_page(&self, index: usize) -> Result<LoadOutcome> {
        self.require_mode(ViewMode::Paged, "set_page")?;
        match self.paged.begin(index, false)? {
            PageStart::Start(ticket) => {
                self.lock_view().page_index = index;
                Ok(self.paged.run(ticket).await)
            }
            PageStart::Skip(SkipReason::Unchanged) => {
                self.lock_view().page_index = index;
                Ok(LoadOutcome::skipped(SkipReason::Unchanged))
            }
            PageStart::Skip(reason) => Ok(LoadOutcome::skipped(reason)),
        }
    }

    /// Incremental mode only.
    pub async fn load_more(&self) -> Result<LoadOutcome> {
        self.require_mode(ViewMode::Incremental, "load_more")?;
        Ok(self.incremental.load_more().await)
    }

    /// Re-issue the failed operation of the active accumulator: Paged
    /// refetches its current page, Incremental resets and reloads.
    pub async fn retry(&self) -> Result<LoadOutcome> {
        match self.mode() {
            ViewMode::Paged => self.paged.refetch().await,
            ViewMode::Incremental => {
                self.incremental.reset();
                Ok(self.incremental.load_more().await)
            }
        }
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.lock_view().search_term = term.into();
    }

    pub fn set_selected_categories(&self, categories: BTreeSet<String>) {
        self.lock_view().selected_categories = categories;
    }

    pub fn toggle_category(&self, name: &str) {
        let mut view = self.lock_view();
        view.selected_categories = toggle_category(&view.selected_categories, name);
    }

    pub fn clear_categories(&self) {
        self.lock_view().selected_categories.clear();
    }

    pub fn view_state(&self) -> ViewState {
        self.lock_view().clone()
    }

    pub fn mode(&self) -> ViewMode {
        self.lock_view().mode
    }

    pub fn snapshot(&self) -> CatalogView {
        let view = self.view_state();
        match view.mode {
            ViewMode::Paged => {
                let paged = self.paged.snapshot();
                CatalogView {
                    mode: view.mode,
                    records: paged.records,
                    is_loading_initial: paged.is_loading,
                    is_loading_more: false,
                    error: paged.error,
                    has_more: paged.has_more,
                    page_index: view.page_index,
                    total_pages: paged.total_pages,
                    total_count: paged.total_count,
                }
            }
            ViewMode::Incremental => {
                let incremental = self.incremental.snapshot();
                CatalogView {
                    mode: view.mode,
                    records: incremental.records,
                    is_loading_initial: incremental.is_loading_initial,
                    is_loading_more: incremental.is_loading_more,
                    error: incremental.error,
                    has_more: incremental.has_more,
                    page_index: view.page_index,
                    total_pages: total_pages(incremental.total_count, self.paged.page_size()),
                    total_count: incremental.total_count,
                }
            }
        }
    }

    /// Whether the active accumulator can show more records.
    pub fn has_more(&self) -> bool {
        match self.mode() {
            ViewMode::Paged => self.paged.has_more(),
            ViewMode::Incremental => self.incremental.has_more(),
        }
    }

    /// Active records narrowed by the current search term and categories.
    pub fn visible(&self) -> Vec<Record> {
        let filter = RecordFilter::from_view(&self.view_state());
        filter.apply(&self.snapshot().records)
    }

    /// Largest total count either accumulator has seen.
    pub fn known_total(&self) -> Option<usize> {
        match (self.paged.total_count(), self.incremental.total_count()) {
            (Some(paged), Some(incremental)) => Some(paged.max(incremental)),
            (paged, incremental) => paged.or(incremental),
        }
    }

    /// Discard in-flight results and restore default view state.
    pub fn unmount(&self) {
        self.paged.invalidate();
        self.incremental.invalidate();
        *self.lock_view() = ViewState::default();
        tracing::debug!("coordinator unmounted");
    }

    fn require_mode(&self, expected: ViewMode, action: &str) -> Result<()> {
        let mode = self.mode();
        if mode != expected {
            return Err(Error::InvalidOperation(format!(
                "{} is only available in {} mode (current mode: {})",
                action, expected, mode
            )));
        }
        Ok(())
    }

    fn lock_view(&self) -> MutexGuard<'_, ViewState> {
        lock(&self.view)
    }
}
