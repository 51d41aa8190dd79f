//! Task record and validated creation input.

use super::{TaskDomainError, TaskId, TaskStatus};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Title given to tasks created when a user is onboarded.
pub const ONBOARDING_TITLE: &str = "Onboarding Task";

/// Description given to tasks created when a user is onboarded.
pub const ONBOARDING_DESCRIPTION: &str = "Complete your onboarding process";

/// Status given to tasks created when a user is onboarded.
///
/// Earlier producers wrote `"Pending"`, which is not a [`TaskStatus`]. Tasks
/// start in `ToDo` instead so every stored status stays inside the
/// transition table.
pub const ONBOARDING_STATUS: TaskStatus = TaskStatus::ToDo;

/// Validated task fields that do not yet have a store identity.
///
/// Used both for creation and as the full replacement body of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    user_id: UserId,
    assignee_id: Option<UserId>,
    title: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates an unassigned `ToDo` task owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        let trimmed = raw_title.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            user_id,
            assignee_id: None,
            title: trimmed.to_owned(),
            description: String::new(),
            status: TaskStatus::ToDo,
            created_at: clock.utc(),
        })
    }

    /// Builds the task handed to a freshly created user.
    #[must_use]
    pub fn onboarding(user_id: UserId, clock: &impl Clock) -> Self {
        Self {
            user_id,
            assignee_id: Some(user_id),
            title: ONBOARDING_TITLE.to_owned(),
            description: ONBOARDING_DESCRIPTION.to_owned(),
            status: ONBOARDING_STATUS,
            created_at: clock.utc(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the assignee. `None` or a zero identifier leaves the task
    /// unassigned.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: Option<UserId>) -> Self {
        self.assignee_id = assignee_id.and_then(UserId::as_assignee);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches an identity.
    #[must_use]
    pub fn with_id(self, id: TaskId) -> Task {
        Task {
            id,
            user_id: self.user_id,
            assignee_id: self.assignee_id,
            title: self.title,
            description: self.description,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    assignee_id: Option<UserId>,
    title: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning user.
    pub user_id: UserId,
    /// Assigned user, if any.
    pub assignee_id: Option<UserId>,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            assignee_id: data.assignee_id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy carrying `replacement`'s fields but this task's
    /// identity and creation time.
    #[must_use]
    pub fn replaced_by(&self, replacement: &Self) -> Self {
        Self {
            id: self.id,
            created_at: self.created_at,
            ..replacement.clone()
        }
    }

    /// Sets the assignee. A zero identifier leaves the task unassigned.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "&mut self methods cannot be const in stable Rust"
    )]
    pub fn assign(&mut self, assignee_id: UserId) {
        self.assignee_id = assignee_id.as_assignee();
    }
}
