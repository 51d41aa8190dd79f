//! Application services for task management.

mod command;
mod query;

pub use command::{TaskCommandService, TaskRequest, TaskServiceError, TaskServiceResult};
pub use query::TaskQueryService;
