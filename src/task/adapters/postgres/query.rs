//! `PostgreSQL` read-side repository for tasks.

use super::{
    models::{TaskRow, row_to_task},
    schema::tasks,
};
use crate::postgres::{PgPool, run_blocking};
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskQueryRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed task query repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskQuery {
    pool: PgPool,
}

impl PostgresTaskQuery {
    /// Creates a repository over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskQueryRepository for PostgresTaskQuery {
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn list_by_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            tasks::table
                .filter(tasks::user_id.eq(user_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }
}
