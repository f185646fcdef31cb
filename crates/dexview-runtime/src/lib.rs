//! Fetch-state orchestration for dexview.
//!
//! Two accumulators hold records fetched through a [`dexview_providers::RecordStore`]:
//! [`PagedAccumulator`] shows one page at a time, [`IncrementalAccumulator`]
//! appends batches. The [`Coordinator`] owns the user's view state, routes
//! actions to the accumulator the current mode selects, and merges their
//! signals into a single [`CatalogView`]. [`DetailView`] shows one record.

pub mod accumulator;
pub mod config;
pub mod coordinator;
pub mod detail;
pub mod error;

pub use accumulator::{
    IncrementalAccumulator, IncrementalSnapshot, LoadOutcome, PagedAccumulator, PagedSnapshot,
    SkipReason,
};
pub use config::{Config, resolve_config_path};
pub use coordinator::{CatalogView, Coordinator};
pub use detail::{DetailSnapshot, DetailView, parse_record_id};
pub use error::{Error, Result};
