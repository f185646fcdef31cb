use dexview_types::{Record, ViewState};
use std::collections::BTreeSet;

/// Narrow `records` by name search and category membership.
///
/// A record passes iff its lower-cased name contains the lower-cased
/// `search_term` (an empty term matches everything) and, when
/// `selected_categories` is non-empty, it carries at least one of them.
/// Input order is preserved and the input is never touched.
pub fn filter(
    records: &[Record],
    search_term: &str,
    selected_categories: &BTreeSet<String>,
) -> Vec<Record> {
    RecordFilter::new(search_term, selected_categories.clone()).apply(records)
}

/// Reusable filter value; lower-cases the search term once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    needle: String,
    categories: BTreeSet<String>,
}

impl RecordFilter {
    pub fn new(search_term: &str, categories: BTreeSet<String>) -> Self {
        Self {
            needle: search_term.to_lowercase(),
            categories,
        }
    }

    pub fn from_view(view: &ViewState) -> Self {
        Self::new(&view.search_term, view.selected_categories.clone())
    }

    pub fn is_identity(&self) -> bool {
        self.needle.is_empty() && self.categories.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        let matches_search =
            self.needle.is_empty() || record.name.to_lowercase().contains(&self.needle);
        let matches_category =
            self.categories.is_empty() || record.has_any_category(&self.categories);
        matches_search && matches_category
    }

    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        if self.is_identity() {
            return records.to_vec();
        }
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
