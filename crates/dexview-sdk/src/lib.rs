//! dexview-sdk: browse a paginated record catalog.
//!
//! # Overview
//!
//! `dexview-sdk` wires the pieces of dexview together: configuration, the
//! PokeAPI-backed record store with its retry policy and cache, and the
//! view-mode coordinator that drives paged or incremental loading. The CLI is
//! built on it, and it can be embedded in any async application.
//!
//! # Quickstart
//!
//! ```no_run
//! use dexview_sdk::Client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect_default()?;
//! let catalog = client.catalog();
//!
//! catalog.initialize().await?;
//! catalog.set_page(2).await?;
//!
//! let view = catalog.snapshot();
//! println!("page {}/{}", view.page_index + 1, view.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `dexview-types`: Data model (Record, PageResult, ViewState)
//! - `dexview-providers`: Fetcher traits, HTTP store, cache
//! - `dexview-engine`: Filtering and page arithmetic
//! - `dexview-runtime`: Accumulators, coordinator, configuration
//!
//! # Usage Patterns
//!
//! ## Infinite scroll
//!
//! The presentation layer decides when the user is near the end of the list
//! and calls `load_more`; the coordinator ignores calls while a batch is in
//! flight and once the store is exhausted.
//!
//! ```no_run
//! use dexview_sdk::{Client, types::ViewMode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect_default()?;
//! let catalog = client.catalog();
//! catalog.set_mode(ViewMode::Incremental).await?;
//!
//! while catalog.snapshot().has_more && catalog.snapshot().records.len() < 60 {
//!     catalog.load_more().await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Filtering
//!
//! Search and category filters apply to whatever the active accumulator
//! holds and never trigger a fetch.
//!
//! ```no_run
//! use dexview_sdk::Client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect_default()?;
//! let catalog = client.catalog();
//! catalog.initialize().await?;
//! catalog.set_search_term("saur");
//! catalog.toggle_category("grass");
//! println!("{} matches", catalog.visible().len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{Client, ClientBuilder, HttpStore};
pub use dexview_runtime::resolve_config_path;
pub use error::{Error, Result};

// ============================================================================
// Low-level Utilities
// ============================================================================

/// Stateless helpers for presenting records.
///
/// # Examples
///
/// ```
/// use dexview_sdk::utils;
///
/// assert_eq!(utils::format_record_id(25), "#025");
/// assert_eq!(utils::format_height(7), "0.7 m");
/// assert_eq!(utils::total_pages(151, 20), 8);
/// ```
pub mod utils {
    pub use dexview_engine::{filter, is_known_category, page_numbers, toggle_category, total_pages};
    pub use dexview_types::{display_name, format_height, format_record_id, format_weight, truncate};
}
