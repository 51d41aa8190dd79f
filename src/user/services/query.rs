//! Read-side access to users.

use crate::user::{
    domain::{User, UserId},
    ports::{UserQueryRepository, UserRepositoryResult},
};
use std::sync::Arc;

/// User query service.
pub struct UserQueryService<Q: UserQueryRepository + ?Sized> {
    queries: Arc<Q>,
}

impl<Q: UserQueryRepository + ?Sized> Clone for UserQueryService<Q> {
    fn clone(&self) -> Self {
        Self {
            queries: Arc::clone(&self.queries),
        }
    }
}

impl<Q: UserQueryRepository + ?Sized> UserQueryService<Q> {
    /// Creates a service over a query repository.
    #[must_use]
    pub const fn new(queries: Arc<Q>) -> Self {
        Self { queries }
    }

    /// Fetches a user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::user::ports::UserRepositoryError::NotFound`] when
    /// the user does not exist.
    pub async fn get_user(&self, id: UserId) -> UserRepositoryResult<User> {
        self.queries.get_by_id(id).await
    }

    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the read fails.
    pub async fn list_users(&self) -> UserRepositoryResult<Vec<User>> {
        self.queries.list_all().await
    }
}
