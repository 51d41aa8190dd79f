//! Reactions of the task context to user lifecycle events.

use crate::events::{
    domain::UserEvent,
    ports::{EventHandler, HandlerError},
};
use crate::task::{domain::NewTask, ports::TaskCommandRepository};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

/// Gives every new user an onboarding task and removes a deleted user's
/// tasks.
///
/// Both reactions write straight through the command repository and
/// publish nothing.
pub struct UserLifecycleReactions<R, C>
where
    R: TaskCommandRepository + ?Sized,
    C: Clock + Send + Sync,
{
    commands: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserLifecycleReactions<R, C>
where
    R: TaskCommandRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates the reactions over a task command repository.
    #[must_use]
    pub const fn new(commands: Arc<R>, clock: Arc<C>) -> Self {
        Self { commands, clock }
    }
}

#[async_trait]
impl<R, C> EventHandler<UserEvent> for UserLifecycleReactions<R, C>
where
    R: TaskCommandRepository + ?Sized,
    C: Clock + Send + Sync,
{
    async fn handle(&self, event: UserEvent) -> Result<(), HandlerError> {
        match event {
            UserEvent::UserCreated { user_id } => {
                let draft = NewTask::onboarding(user_id, &*self.clock);
                let task = self.commands.create(draft).await.map_err(HandlerError::new)?;
                info!(%user_id, task_id = %task.id(), "onboarding task created");
            }
            UserEvent::UserDeleted { user_id } => {
                let removed = self
                    .commands
                    .delete_all_by_user(user_id)
                    .await
                    .map_err(HandlerError::new)?;
                info!(%user_id, removed, "tasks removed for deleted user");
            }
        }
        Ok(())
    }
}
