//! `PostgreSQL` adapters for user persistence.

mod command;
mod models;
mod query;
mod schema;

pub use command::PostgresUserCommand;
pub use query::PostgresUserQuery;
