// Engine module - pure projections over already-fetched records.
// Nothing here fetches; the runtime layer owns all I/O and state.

pub mod categories;
pub mod filter;
pub mod pagination;

pub use categories::{CATEGORY_CATALOG, is_known_category, toggle_category};
pub use filter::{RecordFilter, filter};
pub use pagination::{PageMarker, page_numbers, total_pages};
