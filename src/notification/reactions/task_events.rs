//! Notifies users about task events that concern them.

use crate::events::{
    domain::TaskEvent,
    ports::{EventHandler, HandlerError},
};
use crate::notification::ports::Notifier;
use async_trait::async_trait;
use std::sync::Arc;

/// Sends a notification for every `task_created` and `task_assigned`.
///
/// The owner hears about creation and the assignee about assignment. An
/// assignment event that names nobody fails the handler.
pub struct TaskNotificationHandler<N: Notifier + ?Sized> {
    notifier: Arc<N>,
}

impl<N: Notifier + ?Sized> TaskNotificationHandler<N> {
    /// Creates a handler that sends through `notifier`.
    #[must_use]
    pub const fn new(notifier: Arc<N>) -> Self {
        Self { notifier }
    }
}

fn message_for(event: &TaskEvent) -> String {
    match (event, event.task_id()) {
        (TaskEvent::TaskCreated { .. }, Some(task_id)) => format!("Task {task_id} was created"),
        (TaskEvent::TaskCreated { .. }, None) => "A task was created".to_owned(),
        (TaskEvent::TaskAssigned { .. }, Some(task_id)) => {
            format!("You were assigned task {task_id}")
        }
        (TaskEvent::TaskAssigned { .. }, None) => "You were assigned a task".to_owned(),
    }
}

#[async_trait]
impl<N: Notifier + ?Sized> EventHandler<TaskEvent> for TaskNotificationHandler<N> {
    async fn handle(&self, event: TaskEvent) -> Result<(), HandlerError> {
        let recipient = event
            .recipient()
            .ok_or_else(|| HandlerError::message("task_assigned event names no assignee"))?;
        self.notifier
            .send(recipient, &message_for(&event))
            .await
            .map_err(HandlerError::new)
    }
}
