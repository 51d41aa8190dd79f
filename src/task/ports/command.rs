//! Write-side repository port for tasks.

use super::TaskRepositoryResult;
use crate::task::domain::{NewTask, Task, TaskId};
use crate::user::domain::UserId;
use async_trait::async_trait;

/// Mutating persistence operations for tasks.
///
/// Implementations own the write-side invariants: identities are assigned
/// here and status changes are gated by the transition table before any
/// write happens.
#[async_trait]
pub trait TaskCommandRepository: Send + Sync {
    /// Inserts a task and returns it with its store-assigned identifier.
    async fn create(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Replaces every field of an existing task except its identifier and
    /// creation time.
    ///
    /// The stored status is read and checked against the requested one in
    /// the same storage transaction as the write.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskRepositoryError::NotFound`] when the task does
    /// not exist and [`super::TaskRepositoryError::InvalidTransition`] when
    /// the status change is not allowed. Neither case writes anything.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Deletes a task. Deleting an unknown identifier succeeds.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Deletes every task owned by `user_id` and returns how many went.
    async fn delete_all_by_user(&self, user_id: UserId) -> TaskRepositoryResult<u64>;

    /// Sets the assignee of a task, leaving every other field untouched.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskRepositoryError::NotFound`] when the write
    /// affected no rows.
    async fn assign(&self, task_id: TaskId, assignee_id: UserId) -> TaskRepositoryResult<()>;
}
