//! Wiring of stores, services, and subscription loops for one process.

use crate::config::{ServiceConfig, StorageConfig};
use crate::events::{
    adapters::{InMemoryBroker, InMemoryDeadLetterSink},
    domain::{DomainEvent, TaskEvent, UserEvent},
    ports::{DeadLetter, EventHandler, SubscribeError, Subscriber},
    services::{DeadLetterHandler, Dispatcher, EventPublisher},
};
use crate::notification::{
    adapters::LogNotifier, ports::Notifier, reactions::TaskNotificationHandler,
};
use crate::postgres::build_pool;
use crate::task::{
    adapters::{
        directory::QueryBackedUserDirectory,
        http::HttpUserDirectory,
        memory::InMemoryTaskStore,
        postgres::{PostgresTaskCommand, PostgresTaskQuery},
    },
    ports::{TaskCommandRepository, TaskQueryRepository, UserDirectory},
    reactions::UserLifecycleReactions,
    services::{TaskCommandService, TaskQueryService},
};
use crate::user::{
    adapters::{
        memory::InMemoryUserStore,
        postgres::{PostgresUserCommand, PostgresUserQuery},
    },
    ports::{UserCommandRepository, UserQueryRepository},
    services::{UserCommandService, UserQueryService, UserServiceResult, seed_users},
};
use diesel::r2d2::PoolError;
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Task command service over whichever store the runtime picked.
pub type TaskCommands = TaskCommandService<dyn TaskCommandRepository, DefaultClock>;
/// Task query service over whichever store the runtime picked.
pub type TaskQueries = TaskQueryService<dyn TaskQueryRepository>;
/// User command service over whichever store the runtime picked.
pub type UserCommands = UserCommandService<dyn UserCommandRepository>;
/// User query service over whichever store the runtime picked.
pub type UserQueries = UserQueryService<dyn UserQueryRepository>;

/// Errors raised while starting the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A database pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),
    /// A subscription loop could not be registered.
    #[error(transparent)]
    Subscribe(#[from] SubscribeError),
}

struct Stores {
    task_commands: Arc<dyn TaskCommandRepository>,
    task_queries: Arc<dyn TaskQueryRepository>,
    user_commands: Arc<dyn UserCommandRepository>,
    user_queries: Arc<dyn UserQueryRepository>,
}

impl Stores {
    fn memory() -> Self {
        let tasks = InMemoryTaskStore::new();
        let users = InMemoryUserStore::new();
        Self {
            task_commands: Arc::new(tasks.command_handle()),
            task_queries: Arc::new(tasks.query_handle()),
            user_commands: Arc::new(users.command_handle()),
            user_queries: Arc::new(users.query_handle()),
        }
    }

    fn postgres(url: &str, pool_size: u32) -> Result<Self, PoolError> {
        let command_pool = build_pool(url, pool_size)?;
        let query_pool = build_pool(url, pool_size)?;
        Ok(Self {
            task_commands: Arc::new(PostgresTaskCommand::new(command_pool.clone())),
            task_queries: Arc::new(PostgresTaskQuery::new(query_pool.clone())),
            user_commands: Arc::new(PostgresUserCommand::new(command_pool)),
            user_queries: Arc::new(PostgresUserQuery::new(query_pool)),
        })
    }

    fn open(storage: &StorageConfig) -> Result<Self, PoolError> {
        match storage {
            StorageConfig::Memory => Ok(Self::memory()),
            StorageConfig::Postgres { url, pool_size } => Self::postgres(url, pool_size.get()),
        }
    }
}

/// A running process: services plus the two subscription loops.
///
/// `user.events` feeds the task context's onboarding and cascade
/// reactions; `task.events` feeds notifications. Handler failures are
/// recorded in a bounded dead-letter sink; see [`Self::dead_letters`] and
/// [`Self::take_dead_letters`].
pub struct ServiceRuntime {
    broker: InMemoryBroker,
    dead_letters: InMemoryDeadLetterSink,
    stores: Stores,
    task_commands: TaskCommands,
    task_queries: TaskQueries,
    user_commands: UserCommands,
    user_queries: UserQueries,
    loops: Vec<JoinHandle<()>>,
}

impl ServiceRuntime {
    /// Starts a runtime that notifies through [`LogNotifier`].
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError`] when storage or subscriptions cannot be
    /// set up.
    pub async fn start(config: &ServiceConfig) -> Result<Self, RuntimeError> {
        Self::start_with_notifier(config, Arc::new(LogNotifier)).await
    }

    /// Starts a runtime that notifies through `notifier`.
    ///
    /// # Errors
    ///
    /// As for [`Self::start`].
    pub async fn start_with_notifier(
        config: &ServiceConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, RuntimeError> {
        let stores = Stores::open(&config.storage)?;
        let broker = InMemoryBroker::new();
        let dead_letters = InMemoryDeadLetterSink::new();
        let clock = Arc::new(DefaultClock);
        let events = EventPublisher::new(Arc::new(broker.clone()));

        let directory: Arc<dyn UserDirectory> = match &config.user_service_url {
            Some(url) => Arc::new(HttpUserDirectory::new(url.as_str())),
            None => Arc::new(QueryBackedUserDirectory::new(Arc::clone(&stores.user_queries))),
        };

        let task_commands = TaskCommandService::new(
            Arc::clone(&stores.task_commands),
            events.clone(),
            Arc::clone(&clock),
        )
        .with_directory(directory);
        let task_queries = TaskQueryService::new(Arc::clone(&stores.task_queries));
        let user_commands = UserCommandService::new(Arc::clone(&stores.user_commands), events);
        let user_queries = UserQueryService::new(Arc::clone(&stores.user_queries));

        let user_reactions = DeadLetterHandler::new(
            UserLifecycleReactions::new(Arc::clone(&stores.task_commands), clock),
            dead_letters.clone(),
        );
        let notifications = DeadLetterHandler::new(
            TaskNotificationHandler::new(notifier),
            dead_letters.clone(),
        );

        let loops = vec![
            subscribe::<UserEvent>(&broker, Arc::new(user_reactions)).await?,
            subscribe::<TaskEvent>(&broker, Arc::new(notifications)).await?,
        ];
        info!(service = %config.service_name, "runtime started");

        Ok(Self {
            broker,
            dead_letters,
            stores,
            task_commands,
            task_queries,
            user_commands,
            user_queries,
            loops,
        })
    }

    /// Returns the broker shared by every context in this process.
    #[must_use]
    pub const fn broker(&self) -> &InMemoryBroker {
        &self.broker
    }

    /// Returns the task command service.
    #[must_use]
    pub const fn task_commands(&self) -> &TaskCommands {
        &self.task_commands
    }

    /// Returns the task query service.
    #[must_use]
    pub const fn task_queries(&self) -> &TaskQueries {
        &self.task_queries
    }

    /// Returns the user command service.
    #[must_use]
    pub const fn user_commands(&self) -> &UserCommands {
        &self.user_commands
    }

    /// Returns the user query service.
    #[must_use]
    pub const fn user_queries(&self) -> &UserQueries {
        &self.user_queries
    }

    /// Returns the retained dead letters, oldest first. The sink keeps at
    /// most [`crate::events::adapters::DEFAULT_DEAD_LETTER_CAPACITY`] entries.
    #[must_use]
    pub fn dead_letters(&self) -> Vec<DeadLetter> {
        self.dead_letters.entries()
    }

    /// Removes and returns the recorded dead letters, for example to
    /// retry them.
    #[must_use]
    pub fn take_dead_letters(&self) -> Vec<DeadLetter> {
        self.dead_letters.drain()
    }

    /// Inserts the sample users when the user store is empty.
    ///
    /// # Errors
    ///
    /// Returns the underlying repository error.
    pub async fn seed_users(&self) -> UserServiceResult<usize> {
        seed_users(&*self.stores.user_commands, &*self.stores.user_queries).await
    }

    /// Closes the broker and waits for the subscription loops to drain.
    pub async fn shutdown(self) {
        self.broker.close();
        for handle in self.loops {
            if let Err(err) = handle.await {
                warn!(error = %err, "subscription loop ended abnormally");
            }
        }
        info!("runtime stopped");
    }
}

async fn subscribe<E: DomainEvent>(
    broker: &InMemoryBroker,
    handler: Arc<dyn EventHandler<E>>,
) -> Result<JoinHandle<()>, SubscribeError> {
    let subscription = broker.subscribe(E::SUBJECT).await?;
    Ok(Arc::new(Dispatcher::new(handler)).spawn(subscription))
}
