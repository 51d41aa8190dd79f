//! `PostgreSQL` write-side repository for users.

use super::{
    models::{NewUserRow, UserChangeset, UserRow},
    schema::users,
};
use crate::postgres::{BlockingError, PgPool, run_blocking};
use crate::user::{
    domain::{NewUser, User, UserId},
    ports::{UserCommandRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed user command repository.
#[derive(Debug, Clone)]
pub struct PostgresUserCommand {
    pool: PgPool,
}

impl PostgresUserCommand {
    /// Creates a repository over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<BlockingError> for UserRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl UserCommandRepository for PostgresUserCommand {
    async fn create(&self, user: NewUser) -> UserRepositoryResult<User> {
        let new_row = NewUserRow::from(&user);
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .map(User::from)
                .map_err(UserRepositoryError::persistence)
        })
        .await
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<User> {
        let user_id = user.id();
        let changeset = UserChangeset::from(user);
        run_blocking(&self.pool, move |connection| {
            diesel::update(users::table.find(user_id.value()))
                .set(&changeset)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?
                .map(User::from)
                .ok_or(UserRepositoryError::NotFound(user_id))
        })
        .await
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            diesel::delete(users::table.find(id.value()))
                .execute(connection)
                .map(|_| ())
                .map_err(UserRepositoryError::persistence)
        })
        .await
    }
}
