//! Errors shared by the task command and query repositories.

use crate::task::domain::{TaskId, TaskStatus};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The requested status change is not in the transition table.
    #[error("invalid task status transition for task {task_id} from '{from}' to '{to}'")]
    InvalidTransition {
        /// Task whose update was rejected.
        task_id: TaskId,
        /// Stored status at the time of the update.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
