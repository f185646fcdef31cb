//! Accumulators own one fetch strategy's records and loading signals.
//!
//! Every action runs in two halves. A synchronous `begin` checks the guards,
//! raises the loading flag and captures the current generation before any
//! await, so a second call made before the first resolves sees the flag and
//! is skipped. The async half awaits the store and re-locks to apply the
//! result only if the generation is unchanged.

mod incremental;
mod paged;

pub use incremental::{IncrementalAccumulator, IncrementalSnapshot};
pub use paged::{PagedAccumulator, PagedSnapshot};
pub(crate) use paged::PageStart;

use dexview_types::ErrorInfo;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What an accumulator action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// A fetch completed and its records were applied
    Loaded { count: usize },
    /// No fetch was issued
    Skipped { reason: SkipReason },
    /// A fetch completed with an error, now stored on the accumulator
    Failed { error: ErrorInfo },
    /// A fetch completed after a reset or invalidation and was discarded
    Stale,
}

impl LoadOutcome {
    pub fn skipped(reason: SkipReason) -> Self {
        LoadOutcome::Skipped { reason }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    /// True when the action went to the store.
    pub fn fetched(&self) -> bool {
        !matches!(self, LoadOutcome::Skipped { .. })
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            LoadOutcome::Failed { error } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A fetch for this accumulator is already running
    InFlight,
    /// The requested page is already loaded
    Unchanged,
    /// The store reported no further records
    Exhausted,
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
