//! Shared in-memory user table with separate command and query handles.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::user::{
    domain::{NewUser, User, UserId},
    ports::{
        UserCommandRepository, UserQueryRepository, UserRepositoryError, UserRepositoryResult,
    },
};

/// Backing table shared by every handle created from it.
///
/// The store-wide lock plays the part of the storage engine's own
/// serialisation; the handles add no locking of their own.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    state: Arc<RwLock<UserTable>>,
}

#[derive(Debug, Default)]
struct UserTable {
    next_id: i64,
    users: BTreeMap<UserId, User>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a write-side handle over this store.
    #[must_use]
    pub fn command_handle(&self) -> InMemoryUserCommand {
        InMemoryUserCommand {
            store: self.clone(),
        }
    }

    /// Returns a read-side handle over this store.
    #[must_use]
    pub fn query_handle(&self) -> InMemoryUserQuery {
        InMemoryUserQuery {
            store: self.clone(),
        }
    }

    fn read(&self) -> UserRepositoryResult<RwLockReadGuard<'_, UserTable>> {
        self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> UserRepositoryResult<RwLockWriteGuard<'_, UserTable>> {
        self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Write-side handle over an [`InMemoryUserStore`].
#[derive(Debug, Clone)]
pub struct InMemoryUserCommand {
    store: InMemoryUserStore,
}

/// Read-side handle over an [`InMemoryUserStore`].
#[derive(Debug, Clone)]
pub struct InMemoryUserQuery {
    store: InMemoryUserStore,
}

#[async_trait]
impl UserCommandRepository for InMemoryUserCommand {
    async fn create(&self, user: NewUser) -> UserRepositoryResult<User> {
        let mut table = self.store.write()?;
        table.next_id += 1;
        let created = user.with_id(UserId::new(table.next_id));
        table.users.insert(created.id(), created.clone());
        Ok(created)
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<User> {
        let mut table = self.store.write()?;
        let slot = table
            .users
            .get_mut(&user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?;
        *slot = user.clone();
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut table = self.store.write()?;
        table.users.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl UserQueryRepository for InMemoryUserQuery {
    async fn get_by_id(&self, id: UserId) -> UserRepositoryResult<User> {
        let table = self.store.read()?;
        table
            .users
            .get(&id)
            .cloned()
            .ok_or(UserRepositoryError::NotFound(id))
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        let table = self.store.read()?;
        Ok(table.users.values().cloned().collect())
    }
}
