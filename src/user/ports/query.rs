//! Read-side repository port for users.

use super::UserRepositoryResult;
use crate::user::domain::{User, UserId};
use async_trait::async_trait;

/// Read-only projections over stored users.
#[async_trait]
pub trait UserQueryRepository: Send + Sync {
    /// Fetches a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::UserRepositoryError::NotFound`] when the user does not
    /// exist.
    async fn get_by_id(&self, id: UserId) -> UserRepositoryResult<User>;

    /// Lists every stored user in storage order.
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>>;
}
