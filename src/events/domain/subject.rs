//! Broker subjects carrying domain events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named channel on the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    /// Lifecycle events published by the user context.
    #[serde(rename = "user.events")]
    UserEvents,
    /// Lifecycle events published by the task context.
    #[serde(rename = "task.events")]
    TaskEvents,
}

impl Subject {
    /// Returns the subject name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserEvents => "user.events",
            Self::TaskEvents => "task.events",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
