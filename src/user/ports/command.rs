//! Write-side repository port for users.

use super::UserRepositoryResult;
use crate::user::domain::{NewUser, User, UserId};
use async_trait::async_trait;

/// Mutating persistence operations for users.
#[async_trait]
pub trait UserCommandRepository: Send + Sync {
    /// Inserts a user and returns it with its store-assigned identifier.
    async fn create(&self, user: NewUser) -> UserRepositoryResult<User>;

    /// Replaces every field of an existing user except its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::UserRepositoryError::NotFound`] when no row was
    /// affected.
    async fn update(&self, user: &User) -> UserRepositoryResult<User>;

    /// Deletes a user. Deleting an unknown identifier succeeds.
    async fn delete(&self, id: UserId) -> UserRepositoryResult<()>;
}
