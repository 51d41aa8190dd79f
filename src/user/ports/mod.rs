//! Port contracts for user persistence.
//!
//! Writes and reads go through separate traits so that each side can be
//! backed by its own store handle.

pub mod command;
pub mod error;
pub mod query;

pub use command::UserCommandRepository;
pub use error::{UserRepositoryError, UserRepositoryResult};
pub use query::UserQueryRepository;
