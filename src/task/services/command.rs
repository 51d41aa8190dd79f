//! Write-side orchestration for tasks.

use crate::events::{domain::TaskEvent, ports::PublishError, services::EventPublisher};
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskCommandRepository, TaskRepositoryError, UserDirectory, UserLookupError},
};
use crate::user::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Client-supplied task fields.
///
/// Used for creation and as the full replacement body of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    user_id: UserId,
    title: String,
    description: String,
    assignee_id: Option<UserId>,
    status: TaskStatus,
}

impl TaskRequest {
    /// Creates a request for an unassigned `ToDo` task.
    #[must_use]
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            description: String::new(),
            assignee_id: None,
            status: TaskStatus::ToDo,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: UserId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    fn into_new_task(self, clock: &impl Clock) -> Result<NewTask, TaskDomainError> {
        Ok(NewTask::new(self.user_id, self.title, clock)?
            .with_description(self.description)
            .with_assignee(self.assignee_id)
            .with_status(self.status))
    }
}

/// Errors returned by [`TaskCommandService`].
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The repository rejected the operation.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The assignee could not be confirmed.
    #[error(transparent)]
    Lookup(#[from] UserLookupError),
    /// The write succeeded but its event could not be published.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Result type for task command service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task command service.
///
/// Mutations go through the command repository. Creation and assignment
/// are announced on `task.events` once the write has succeeded; a publish
/// failure is reported but the write stays.
pub struct TaskCommandService<R, C>
where
    R: TaskCommandRepository + ?Sized,
    C: Clock + Send + Sync,
{
    commands: Arc<R>,
    events: EventPublisher,
    directory: Option<Arc<dyn UserDirectory>>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskCommandService<R, C>
where
    R: TaskCommandRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            commands: Arc::clone(&self.commands),
            events: self.events.clone(),
            directory: self.directory.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskCommandService<R, C>
where
    R: TaskCommandRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a service without assignee validation.
    #[must_use]
    pub const fn new(commands: Arc<R>, events: EventPublisher, clock: Arc<C>) -> Self {
        Self {
            commands,
            events,
            directory: None,
            clock,
        }
    }

    /// Validates assignees through `directory` before assigning.
    #[must_use]
    pub fn with_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Creates a task and publishes `task_created`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for invalid input,
    /// [`TaskServiceError::Repository`] when the write fails and
    /// [`TaskServiceError::Publish`] when the event is not accepted.
    pub async fn create_task(&self, request: TaskRequest) -> TaskServiceResult<Task> {
        let draft = request.into_new_task(&*self.clock)?;
        let task = self.commands.create(draft).await?;
        info!(task_id = %task.id(), user_id = %task.user_id(), "task created");

        self.events.publish(&TaskEvent::created(&task)).await?;
        Ok(task)
    }

    /// Replaces a task's fields, subject to the status transition table.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] carrying `NotFound` or
    /// `InvalidTransition` when the repository refuses the update.
    pub async fn update_task(&self, id: TaskId, request: TaskRequest) -> TaskServiceResult<Task> {
        let replacement = request.into_new_task(&*self.clock)?.with_id(id);
        let task = self.commands.update(&replacement).await?;
        info!(task_id = %id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Deletes a task. Unknown identifiers succeed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the write fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.commands.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Deletes every task owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the write fails.
    pub async fn delete_tasks_for_user(&self, user_id: UserId) -> TaskServiceResult<u64> {
        let removed = self.commands.delete_all_by_user(user_id).await?;
        info!(%user_id, removed, "tasks deleted for user");
        Ok(removed)
    }

    /// Assigns a task and publishes `task_assigned`.
    ///
    /// When a directory is configured the assignee must exist there first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Lookup`] when the assignee cannot be
    /// confirmed, [`TaskServiceError::Repository`] when the task does not
    /// exist and [`TaskServiceError::Publish`] when the event is not
    /// accepted.
    pub async fn assign_task(&self, task_id: TaskId, assignee_id: UserId) -> TaskServiceResult<()> {
        if let Some(directory) = &self.directory {
            directory.get_user_by_id(assignee_id).await?;
        }

        self.commands.assign(task_id, assignee_id).await?;
        info!(%task_id, %assignee_id, "task assigned");

        self.events
            .publish(&TaskEvent::assigned(task_id, assignee_id))
            .await?;
        Ok(())
    }
}
