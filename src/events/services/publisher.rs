//! Typed publishing over a raw broker port.

use crate::events::domain::DomainEvent;
use crate::events::ports::{PublishError, Publisher};
use std::sync::Arc;
use tracing::debug;

/// Encodes typed events and hands them to the broker under their subject.
#[derive(Clone)]
pub struct EventPublisher {
    publisher: Arc<dyn Publisher>,
}

impl EventPublisher {
    /// Wraps a raw publisher.
    #[must_use]
    pub const fn new(publisher: Arc<dyn Publisher>) -> Self {
        Self { publisher }
    }

    /// Publishes `event` on its subject.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Encode`] if the event cannot be serialised
    /// and [`PublishError::Transport`] if the broker does not accept it.
    pub async fn publish<E: DomainEvent>(&self, event: &E) -> Result<(), PublishError> {
        let payload = event.to_envelope()?.encode()?;
        self.publisher.publish(E::SUBJECT, payload).await?;
        debug!(subject = %E::SUBJECT, action = event.action(), "event published");
        Ok(())
    }
}
