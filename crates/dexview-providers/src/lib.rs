// Error types
pub mod error;

// Fetcher contracts (public API)
pub mod traits;

// HTTP transport and retry policy
pub mod transport;

// PokeAPI implementation
pub mod pokeapi;

// Bounded keyed cache
pub mod cache;

// Traits
pub use traits::{DetailFetcher, ListFetcher, LoadedPage, RecordStore};

// Implementations
pub use cache::{CacheStats, CachedStore};
pub use pokeapi::{DEFAULT_BASE_URL, PokeApiStore};
pub use transport::RetryPolicy;

// Error types
pub use error::{Error, Result};
