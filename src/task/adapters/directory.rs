//! In-process user lookup over a user query repository.

use crate::task::ports::{UserDirectory, UserLookupError, UserLookupResult};
use crate::user::{
    domain::{User, UserId},
    ports::{UserQueryRepository, UserRepositoryError},
};
use async_trait::async_trait;
use std::sync::Arc;

/// [`UserDirectory`] answering from a co-located user query repository.
///
/// Used when the task and user contexts run in the same process.
#[derive(Clone)]
pub struct QueryBackedUserDirectory {
    users: Arc<dyn UserQueryRepository>,
}

impl QueryBackedUserDirectory {
    /// Wraps a user query repository.
    #[must_use]
    pub const fn new(users: Arc<dyn UserQueryRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for QueryBackedUserDirectory {
    async fn get_user_by_id(&self, id: UserId) -> UserLookupResult<User> {
        self.users.get_by_id(id).await.map_err(|err| match err {
            UserRepositoryError::NotFound(user_id) => UserLookupError::NotFound {
                user_id,
                status: 404,
            },
            UserRepositoryError::Persistence(source) => UserLookupError::Unreachable(source),
        })
    }
}
