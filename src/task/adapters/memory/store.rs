//! Shared in-memory task table with separate command and query handles.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskId},
    ports::{
        TaskCommandRepository, TaskQueryRepository, TaskRepositoryError, TaskRepositoryResult,
    },
};
use crate::user::domain::UserId;

/// Backing table shared by every handle created from it.
///
/// The store-wide lock stands in for the storage engine's row locking; the
/// handles themselves add no coordination.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<TaskTable>>,
}

#[derive(Debug, Default)]
struct TaskTable {
    next_id: i64,
    tasks: BTreeMap<TaskId, Task>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a write-side handle over this store.
    #[must_use]
    pub fn command_handle(&self) -> InMemoryTaskCommand {
        InMemoryTaskCommand {
            store: self.clone(),
        }
    }

    /// Returns a read-side handle over this store.
    #[must_use]
    pub fn query_handle(&self) -> InMemoryTaskQuery {
        InMemoryTaskQuery {
            store: self.clone(),
        }
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, TaskTable>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, TaskTable>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Write-side handle over an [`InMemoryTaskStore`].
#[derive(Debug, Clone)]
pub struct InMemoryTaskCommand {
    store: InMemoryTaskStore,
}

/// Read-side handle over an [`InMemoryTaskStore`].
#[derive(Debug, Clone)]
pub struct InMemoryTaskQuery {
    store: InMemoryTaskStore,
}

#[async_trait]
impl TaskCommandRepository for InMemoryTaskCommand {
    async fn create(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let mut table = self.store.write()?;
        table.next_id += 1;
        let created = task.with_id(TaskId::new(table.next_id));
        table.tasks.insert(created.id(), created.clone());
        Ok(created)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut table = self.store.write()?;
        let stored = table
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;

        if !stored.status().can_transition_to(task.status()) {
            return Err(TaskRepositoryError::InvalidTransition {
                task_id: task.id(),
                from: stored.status(),
                to: task.status(),
            });
        }

        *stored = stored.replaced_by(task);
        Ok(stored.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut table = self.store.write()?;
        table.tasks.remove(&id);
        Ok(())
    }

    async fn delete_all_by_user(&self, user_id: UserId) -> TaskRepositoryResult<u64> {
        let mut table = self.store.write()?;
        let before = table.tasks.len();
        table.tasks.retain(|_, task| task.user_id() != user_id);
        let removed = before - table.tasks.len();
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }

    async fn assign(&self, task_id: TaskId, assignee_id: UserId) -> TaskRepositoryResult<()> {
        let mut table = self.store.write()?;
        match table.tasks.get_mut(&task_id) {
            Some(task) => {
                task.assign(assignee_id);
                Ok(())
            }
            None => Err(TaskRepositoryError::NotFound(task_id)),
        }
    }
}

#[async_trait]
impl TaskQueryRepository for InMemoryTaskQuery {
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let table = self.store.read()?;
        table
            .tasks
            .get(&id)
            .cloned()
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn list_by_user(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let table = self.store.read()?;
        Ok(table
            .tasks
            .values()
            .filter(|task| task.user_id() == user_id)
            .cloned()
            .collect())
    }
}
