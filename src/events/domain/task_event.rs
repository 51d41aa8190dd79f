//! Events published on `task.events`.

use super::{DomainEvent, Subject};
use crate::task::domain::{Task, TaskId};
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};

/// Task lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TaskEvent {
    /// A task was stored.
    TaskCreated {
        /// Owner of the new task.
        user_id: UserId,
        /// The new task, when the producer knows it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task_id: Option<TaskId>,
    },
    /// A task was handed to a user.
    ///
    /// Older producers name the assignee `user_id`; newer ones send both
    /// fields.
    TaskAssigned {
        /// The assigned task, when the producer knows it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task_id: Option<TaskId>,
        /// Assignee, legacy spelling.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_id: Option<UserId>,
        /// Assignee.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assignee_id: Option<UserId>,
    },
}

impl TaskEvent {
    /// Builds the event announcing a stored task.
    #[must_use]
    pub const fn created(task: &Task) -> Self {
        Self::TaskCreated {
            user_id: task.user_id(),
            task_id: Some(task.id()),
        }
    }

    /// Builds the event announcing an assignment.
    #[must_use]
    pub const fn assigned(task_id: TaskId, assignee_id: UserId) -> Self {
        Self::TaskAssigned {
            task_id: Some(task_id),
            user_id: Some(assignee_id),
            assignee_id: Some(assignee_id),
        }
    }

    /// Returns the user who should hear about the event.
    #[must_use]
    pub const fn recipient(&self) -> Option<UserId> {
        match self {
            Self::TaskCreated { user_id, .. } => Some(*user_id),
            Self::TaskAssigned {
                assignee_id: Some(assignee),
                ..
            } => Some(*assignee),
            Self::TaskAssigned { user_id, .. } => *user_id,
        }
    }

    /// Returns the task the event is about, if known.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::TaskCreated { task_id, .. } | Self::TaskAssigned { task_id, .. } => *task_id,
        }
    }
}

impl DomainEvent for TaskEvent {
    const SUBJECT: Subject = Subject::TaskEvents;
    const ACTIONS: &'static [&'static str] = &["task_created", "task_assigned"];

    fn action(&self) -> &'static str {
        match self {
            Self::TaskCreated { .. } => "task_created",
            Self::TaskAssigned { .. } => "task_assigned",
        }
    }
}
