//! Testing infrastructure for dexview tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `FakeStore`: In-memory record store with call counters, gates and failure injection
//! - `fixtures`: Sample record generation
//! - `assertions`: Readable checks over records and CLI JSON output
//! - `TestWorld`: Isolated config directory for running the `dexview` binary

pub mod assertions;
pub mod fixtures;
pub mod store;
pub mod world;

pub use store::FakeStore;
pub use world::{CliResult, TestWorld};
