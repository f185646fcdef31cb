use dexview_types::{PageResult, Record};
use futures::future::try_join_all;
use std::future::Future;

use crate::Result;

/// List fetching contract
///
/// Responsibilities:
/// - Fetch exactly one page of summaries for `(limit, offset)`
/// - Report the store's total count and whether a next page exists
/// - Fail with `NetworkFailure` on transport rejection or non-success status
///
/// Implementations perform no retries of their own beyond what their
/// transport is configured for, and need not cache.
pub trait ListFetcher: Send + Sync {
    fn fetch_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> impl Future<Output = Result<PageResult>> + Send;
}

/// Detail fetching contract
///
/// Resolves opaque references (URL or id) into full records.
pub trait DetailFetcher: Send + Sync {
    /// Fetch one full record.
    fn fetch_detail(&self, reference: &str) -> impl Future<Output = Result<Record>> + Send;

    /// Fetch many records concurrently.
    ///
    /// Output order matches `references`, regardless of completion order.
    /// All-or-nothing: the first failure fails the whole call and names
    /// the reference that failed.
    fn fetch_details(
        &self,
        references: &[String],
    ) -> impl Future<Output = Result<Vec<Record>>> + Send {
        async move {
            try_join_all(references.iter().map(|reference| self.fetch_detail(reference))).await
        }
    }
}

/// A page together with the full records for its summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    pub page: PageResult,
    pub records: Vec<Record>,
}

/// Anything that can serve both list and detail requests.
///
/// A page only counts as loaded once both its summaries and its details
/// have been fetched, which is what [`RecordStore::fetch_loaded_page`] does.
pub trait RecordStore: ListFetcher + DetailFetcher {
    fn fetch_loaded_page(
        &self,
        limit: usize,
        offset: usize,
    ) -> impl Future<Output = Result<LoadedPage>> + Send {
        async move {
            let page = self.fetch_page(limit, offset).await?;
            let references = page.references();
            let records = self.fetch_details(&references).await?;
            Ok(LoadedPage { page, records })
        }
    }
}

impl<T: ListFetcher + DetailFetcher> RecordStore for T {}
