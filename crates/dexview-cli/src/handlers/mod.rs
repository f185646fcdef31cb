mod context;

pub mod browse;
pub mod config;
pub mod list;
pub mod show;

pub use context::HandlerContext;

use crate::args::FilterArgs;
use dexview_sdk::Client;
use dexview_sdk::utils::is_known_category;
use std::collections::BTreeSet;

/// Push `--search` / `--type` into the coordinator's view state.
fn apply_filter(client: &Client, filter: &FilterArgs) {
    let catalog = client.catalog();
    if let Some(term) = &filter.search {
        catalog.set_search_term(term.as_str());
    }

    let categories: BTreeSet<String> = filter
        .types
        .iter()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();
    for name in &categories {
        if !is_known_category(name) {
            tracing::warn!(category = %name, "unknown type; nothing will match it");
        }
    }
    catalog.set_selected_categories(categories);
}
