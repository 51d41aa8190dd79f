//! Events published on `user.events`.

use super::{DomainEvent, Subject};
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};

/// User lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserEvent {
    /// A user was stored.
    UserCreated {
        /// The new user.
        user_id: UserId,
    },
    /// A user was removed.
    UserDeleted {
        /// The removed user.
        user_id: UserId,
    },
}

impl UserEvent {
    /// Returns the user the event is about.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        match self {
            Self::UserCreated { user_id } | Self::UserDeleted { user_id } => *user_id,
        }
    }
}

impl DomainEvent for UserEvent {
    const SUBJECT: Subject = Subject::UserEvents;
    const ACTIONS: &'static [&'static str] = &["user_created", "user_deleted"];

    fn action(&self) -> &'static str {
        match self {
            Self::UserCreated { .. } => "user_created",
            Self::UserDeleted { .. } => "user_deleted",
        }
    }
}
