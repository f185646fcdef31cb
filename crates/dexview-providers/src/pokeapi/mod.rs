mod client;
mod mapper;
mod schema;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PokeApiStore, PokeApiStoreBuilder};
