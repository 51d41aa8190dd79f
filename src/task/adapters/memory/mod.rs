//! In-memory task repositories for tests and single-process runs.

mod store;

pub use store::{InMemoryTaskCommand, InMemoryTaskQuery, InMemoryTaskStore};
