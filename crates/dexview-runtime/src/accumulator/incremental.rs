use dexview_providers::RecordStore;
use dexview_types::{Cursor, ErrorInfo, Record};
use serde::Serialize;
use std::sync::{Arc, Mutex};

use super::{LoadOutcome, SkipReason, lock};

/// Read-only view of an [`IncrementalAccumulator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncrementalSnapshot {
    pub records: Vec<Record>,
    pub is_loading_initial: bool,
    pub is_loading_more: bool,
    pub error: Option<ErrorInfo>,
    pub has_more: bool,
    pub cursor: Cursor,
    /// 0 until the first successful fetch
    pub total_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initial,
    More,
}

#[derive(Debug)]
struct IncrementalState {
    records: Vec<Record>,
    cursor: Cursor,
    has_more: bool,
    loading: Option<Phase>,
    error: Option<ErrorInfo>,
    total_count: Option<usize>,
    generation: u64,
}

impl Default for IncrementalState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            cursor: Cursor::start(),
            has_more: true,
            loading: None,
            error: None,
            total_count: None,
            generation: 0,
        }
    }
}

struct BatchTicket {
    generation: u64,
    cursor: Cursor,
}

/// Batches accumulate; each successful fetch appends and advances the cursor.
pub struct IncrementalAccumulator<S> {
    store: Arc<S>,
    batch_size: usize,
    state: Mutex<IncrementalState>,
}

impl<S: RecordStore> IncrementalAccumulator<S> {
    /// `batch_size` is clamped to at least 1.
    pub fn new(store: Arc<S>, batch_size: usize) -> Self {
        Self {
            store,
            batch_size: batch_size.max(1),
            state: Mutex::new(IncrementalState::default()),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Fetch and append the next batch.
    ///
    /// Skipped while a batch is in flight or once the store is exhausted.
    /// A failure leaves records and cursor as they were.
    pub async fn load_more(&self) -> LoadOutcome {
        let ticket = match self.begin() {
            Ok(ticket) => ticket,
            Err(reason) => return LoadOutcome::skipped(reason),
        };
        self.run(ticket).await
    }

    /// First batch only: a no-op once anything is loaded or loading.
    pub async fn initialize(&self) -> LoadOutcome {
        {
            let state = lock(&self.state);
            if !state.records.is_empty() {
                return LoadOutcome::skipped(SkipReason::Unchanged);
            }
        }
        self.load_more().await
    }

    /// Back to the empty state, synchronously. Never fetches; any in-flight
    /// batch will come back as `Stale`.
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        let generation = state.generation + 1;
        *state = IncrementalState {
            generation,
            ..IncrementalState::default()
        };
        tracing::debug!(generation, "incremental accumulator reset");
    }

    /// Drop any in-flight batch without touching what is loaded.
    pub fn invalidate(&self) {
        let mut state = lock(&self.state);
        state.generation += 1;
        state.loading = None;
    }

    pub fn snapshot(&self) -> IncrementalSnapshot {
        let state = lock(&self.state);
        IncrementalSnapshot {
            records: state.records.clone(),
            is_loading_initial: state.loading == Some(Phase::Initial),
            is_loading_more: state.loading == Some(Phase::More),
            error: state.error.clone(),
            has_more: state.has_more,
            cursor: state.cursor,
            total_count: state.total_count.unwrap_or(0),
        }
    }

    pub fn has_more(&self) -> bool {
        lock(&self.state).has_more
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading.is_some()
    }

    /// `None` until the first successful fetch.
    pub fn total_count(&self) -> Option<usize> {
        lock(&self.state).total_count
    }

    fn begin(&self) -> Result<BatchTicket, SkipReason> {
        let mut state = lock(&self.state);
        if state.loading.is_some() {
            return Err(SkipReason::InFlight);
        }
        if !state.has_more {
            return Err(SkipReason::Exhausted);
        }

        state.loading = Some(if state.records.is_empty() {
            Phase::Initial
        } else {
            Phase::More
        });
        state.error = None;
        Ok(BatchTicket {
            generation: state.generation,
            cursor: state.cursor,
        })
    }

    async fn run(&self, ticket: BatchTicket) -> LoadOutcome {
        tracing::debug!(cursor = %ticket.cursor, limit = self.batch_size, "fetching batch");
        let result = self
            .store
            .fetch_loaded_page(self.batch_size, ticket.cursor.offset())
            .await;

        let mut state = lock(&self.state);
        if state.generation != ticket.generation {
            tracing::debug!(cursor = %ticket.cursor, "discarding stale batch");
            return LoadOutcome::Stale;
        }
        state.loading = None;

        match result {
            Ok(loaded) => {
                let count = loaded.records.len();
                state.records.extend(loaded.records);
                state.total_count = Some(loaded.page.total_count);
                match loaded.page.next_cursor {
                    Some(next) if next > ticket.cursor => {
                        state.cursor = next;
                        state.has_more = true;
                    }
                    Some(next) => {
                        tracing::warn!(
                            cursor = %ticket.cursor,
                            next = %next,
                            "next cursor did not advance; treating as exhausted"
                        );
                        state.has_more = false;
                    }
                    None => state.has_more = false,
                }
                tracing::info!(
                    count,
                    total = state.records.len(),
                    has_more = state.has_more,
                    "batch appended"
                );
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                let error = ErrorInfo::from_error(&err);
                tracing::warn!(cursor = %ticket.cursor, error = %error, "batch fetch failed");
                state.error = Some(error.clone());
                LoadOutcome::Failed { error }
            }
        }
    }
}
