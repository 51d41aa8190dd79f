//! In-memory user repositories for tests and single-process runs.

mod store;

pub use store::{InMemoryUserCommand, InMemoryUserQuery, InMemoryUserStore};
