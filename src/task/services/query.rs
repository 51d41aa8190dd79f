//! Read-side access to tasks.

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskQueryRepository, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use std::sync::Arc;

/// Task query service.
pub struct TaskQueryService<Q: TaskQueryRepository + ?Sized> {
    queries: Arc<Q>,
}

impl<Q: TaskQueryRepository + ?Sized> Clone for TaskQueryService<Q> {
    fn clone(&self) -> Self {
        Self {
            queries: Arc::clone(&self.queries),
        }
    }
}

impl<Q: TaskQueryRepository + ?Sized> TaskQueryService<Q> {
    /// Creates a service over a query repository.
    #[must_use]
    pub const fn new(queries: Arc<Q>) -> Self {
        Self { queries }
    }

    /// Fetches a task.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::ports::TaskRepositoryError::NotFound`] when
    /// the task does not exist.
    pub async fn get_task(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        self.queries.get_by_id(id).await
    }

    /// Lists the tasks owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the read fails.
    pub async fn list_tasks_for_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.queries.list_by_user(user_id).await
    }
}
