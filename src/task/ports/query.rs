//! Read-side repository port for tasks.

use super::TaskRepositoryResult;
use crate::task::domain::{Task, TaskId};
use crate::user::domain::UserId;
use async_trait::async_trait;

/// Read-only projections over stored tasks.
#[async_trait]
pub trait TaskQueryRepository: Send + Sync {
    /// Fetches a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskRepositoryError::NotFound`] when the task does
    /// not exist.
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task>;

    /// Lists the tasks owned by `user_id` in storage order.
    async fn list_by_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>>;
}
