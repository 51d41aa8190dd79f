//! `PostgreSQL` adapters for task persistence.

mod command;
mod models;
mod query;
mod schema;

pub use command::PostgresTaskCommand;
pub use query::PostgresTaskQuery;
