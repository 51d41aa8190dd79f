//! `PostgreSQL` write-side repository for tasks.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow, row_to_task},
    schema::tasks,
};
use crate::postgres::{BlockingError, PgPool, run_blocking};
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskStatus},
    ports::{TaskCommandRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;

/// `PostgreSQL`-backed task command repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskCommand {
    pool: PgPool,
}

impl PostgresTaskCommand {
    /// Creates a repository over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<BlockingError> for TaskRepositoryError {
    fn from(err: BlockingError) -> Self {
        Self::persistence(err)
    }
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskCommandRepository for PostgresTaskCommand {
    async fn create(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow::from(&task);
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let requested = task.status();
        let changeset = TaskChangeset::from(task);
        run_blocking(&self.pool, move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|conn| {
                let stored = tasks::table
                    .find(task_id.value())
                    .select(tasks::status)
                    .for_update()
                    .first::<String>(conn)
                    .optional()?
                    .ok_or(TaskRepositoryError::NotFound(task_id))?;
                let current = TaskStatus::try_from(stored.as_str())
                    .map_err(TaskRepositoryError::persistence)?;

                if !current.can_transition_to(requested) {
                    return Err(TaskRepositoryError::InvalidTransition {
                        task_id,
                        from: current,
                        to: requested,
                    });
                }

                let row = diesel::update(tasks::table.find(task_id.value()))
                    .set(&changeset)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(conn)?;
                row_to_task(row)
            })
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            diesel::delete(tasks::table.find(id.value())).execute(connection)?;
            Ok(())
        })
        .await
    }

    async fn delete_all_by_user(&self, user_id: UserId) -> TaskRepositoryResult<u64> {
        run_blocking(&self.pool, move |connection| {
            let removed = diesel::delete(tasks::table.filter(tasks::user_id.eq(user_id.value())))
                .execute(connection)?;
            Ok(u64::try_from(removed).unwrap_or(u64::MAX))
        })
        .await
    }

    async fn assign(&self, task_id: TaskId, assignee_id: UserId) -> TaskRepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.value()))
                .set(tasks::assignee_id.eq(assignee_id.as_assignee().map(UserId::value)))
                .execute(connection)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }
}
