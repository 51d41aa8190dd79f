//! `PostgreSQL` read-side repository for users.

use super::{models::UserRow, schema::users};
use crate::postgres::{PgPool, run_blocking};
use crate::user::{
    domain::{User, UserId},
    ports::{UserQueryRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed user query repository.
///
/// Holds its own pool so reads never share connections with the command
/// side.
#[derive(Debug, Clone)]
pub struct PostgresUserQuery {
    pool: PgPool,
}

impl PostgresUserQuery {
    /// Creates a repository over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserQueryRepository for PostgresUserQuery {
    async fn get_by_id(&self, id: UserId) -> UserRepositoryResult<User> {
        run_blocking(&self.pool, move |connection| {
            users::table
                .find(id.value())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?
                .map(User::from)
                .ok_or(UserRepositoryError::NotFound(id))
        })
        .await
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        run_blocking(&self.pool, move |connection| {
            users::table
                .order(users::id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map(|rows| rows.into_iter().map(User::from).collect())
                .map_err(UserRepositoryError::persistence)
        })
        .await
    }
}
