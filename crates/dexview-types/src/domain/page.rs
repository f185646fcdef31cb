use serde::{Deserialize, Serialize};
use std::fmt;

use super::RecordSummary;

/// Opaque resume point for incremental fetching.
///
/// Internally the next offset into the record store. Callers should only
/// obtain cursors from [`PageResult::next_cursor`] or [`Cursor::start`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(usize);

impl Cursor {
    /// Cursor denoting the beginning of the store.
    pub const fn start() -> Self {
        Self(0)
    }

    pub const fn at_offset(offset: usize) -> Self {
        Self(offset)
    }

    pub const fn offset(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// One fetched page of summaries.
///
/// `next_cursor == None` means the store has no further pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub total_count: usize,
    pub next_cursor: Option<Cursor>,
    pub items: Vec<RecordSummary>,
}

impl PageResult {
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn references(&self) -> Vec<String> {
        self.items.iter().map(|s| s.reference.clone()).collect()
    }
}
