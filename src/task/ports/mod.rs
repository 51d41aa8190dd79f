//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.
//! Writes and reads are split across [`TaskCommandRepository`] and
//! [`TaskQueryRepository`], each expected to hold its own store handle.

pub mod command;
pub mod directory;
pub mod error;
pub mod query;

pub use command::TaskCommandRepository;
pub use directory::{UserDirectory, UserLookupError, UserLookupResult};
pub use error::{TaskRepositoryError, TaskRepositoryResult};
pub use query::TaskQueryRepository;
