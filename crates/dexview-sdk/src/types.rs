//! Type re-exports for the SDK.
//!
//! This module re-exports all types that SDK consumers (like the CLI) need to work with.
//! By centralizing these re-exports, we maintain a stable API boundary while allowing
//! internal crate refactoring without breaking SDK clients.

// ============================================================================
// Data model (from dexview-types)
// ============================================================================

pub use dexview_types::{
    Ability, Attribute, Cursor, ErrorInfo, Media, PLACEHOLDER_IMAGE_URL, PageResult, Record,
    RecordSummary, ViewMode, ViewState,
};

// ============================================================================
// Fetch state (from dexview-runtime)
// ============================================================================

pub use dexview_runtime::{
    CatalogView, Config, DetailSnapshot, IncrementalSnapshot, LoadOutcome, PagedSnapshot,
    SkipReason,
};

// ============================================================================
// Store plumbing (from dexview-providers)
// ============================================================================

pub use dexview_providers::{CacheStats, DetailFetcher, ListFetcher, RecordStore, RetryPolicy};

// ============================================================================
// Projections (from dexview-engine)
// ============================================================================

pub use dexview_engine::{CATEGORY_CATALOG, PageMarker, RecordFilter};
