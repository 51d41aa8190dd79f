//! Application services for user management.

mod command;
mod query;
mod seed;

pub use command::{UserCommandService, UserRequest, UserServiceError, UserServiceResult};
pub use query::UserQueryService;
pub use seed::seed_users;
