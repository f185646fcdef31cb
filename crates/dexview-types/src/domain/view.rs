use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Which accumulator feeds the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Explicit page controls, one page replaces the previous one
    #[default]
    Paged,
    /// "Load more" / infinite scroll, batches accumulate
    Incremental,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Paged => write!(f, "paged"),
            ViewMode::Incremental => write!(f, "incremental"),
        }
    }
}

/// User-controlled view state, owned by the coordinator.
///
/// Created with defaults at mount, changed only by explicit user actions,
/// and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: ViewMode,
    pub page_index: usize,
    pub search_term: String,
    pub selected_categories: BTreeSet<String>,
}

impl ViewState {
    /// True when neither search nor category filtering narrows the records.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.selected_categories.is_empty()
    }
}
