//! Synchronous user lookup used by the task command path.

use crate::user::domain::{User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user lookups.
pub type UserLookupResult<T> = Result<T, UserLookupError>;

/// Request/response access to the user service.
///
/// This path is independent of event choreography: a failed lookup is
/// reported straight back to the caller.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetches a user by identifier.
    async fn get_user_by_id(&self, id: UserId) -> UserLookupResult<User>;
}

/// Errors returned by user directory adapters.
#[derive(Debug, Clone, Error)]
pub enum UserLookupError {
    /// The user service did not return the user.
    #[error("user {user_id} not found (status {status})")]
    NotFound {
        /// Requested user.
        user_id: UserId,
        /// Status code reported by the user service.
        status: u16,
    },

    /// The user service could not be reached.
    #[error("user service unreachable: {0}")]
    Unreachable(Arc<dyn std::error::Error + Send + Sync>),

    /// The user service answered with a body that is not a user.
    #[error("malformed user response: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserLookupError {
    /// Wraps a transport failure.
    pub fn unreachable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unreachable(Arc::new(err))
    }

    /// Wraps a response decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
