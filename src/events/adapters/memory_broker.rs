//! In-process broker with fire-and-forget fan-out.

use crate::events::domain::Subject;
use crate::events::ports::{PublishError, Publisher, SubscribeError, Subscriber, Subscription};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::trace;

/// Raised when the broker no longer accepts traffic.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("broker is closed")]
pub struct BrokerClosed;

/// Raised when the broker's state lock was poisoned.
#[derive(Debug, Clone, Error)]
#[error("broker state lock poisoned: {0}")]
pub struct BrokerPoisoned(String);

/// Broker that delivers payloads to every live subscriber of a subject.
///
/// Publishing to a subject without subscribers succeeds and the payload is
/// dropped. Clones share the same subscriber table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBroker {
    state: Arc<Mutex<BrokerState>>,
}

#[derive(Debug, Default)]
struct BrokerState {
    closed: bool,
    subscribers: HashMap<Subject, Vec<mpsc::UnboundedSender<Vec<u8>>>>,
}

impl InMemoryBroker {
    /// Creates an open broker with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops accepting publishes and ends every open subscription once its
    /// buffered payloads are drained.
    pub fn close(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.closed = true;
            state.subscribers.clear();
        }
    }

    /// Returns the number of live subscriptions on `subject`.
    #[must_use]
    pub fn subscriber_count(&self, subject: Subject) -> usize {
        self.state.lock().map_or(0, |state| {
            state
                .subscribers
                .get(&subject)
                .map_or(0, |senders| senders.iter().filter(|tx| !tx.is_closed()).count())
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, BrokerState>, BrokerPoisoned> {
        self.state
            .lock()
            .map_err(|err| BrokerPoisoned(err.to_string()))
    }
}

#[async_trait]
impl Publisher for InMemoryBroker {
    async fn publish(&self, subject: Subject, payload: Vec<u8>) -> Result<(), PublishError> {
        let mut state = self.lock().map_err(PublishError::transport)?;
        if state.closed {
            return Err(PublishError::transport(BrokerClosed));
        }

        let Some(senders) = state.subscribers.get_mut(&subject) else {
            trace!(%subject, "no subscribers; payload dropped");
            return Ok(());
        };
        senders.retain(|tx| tx.send(payload.clone()).is_ok());
        trace!(%subject, delivered = senders.len(), "payload published");
        Ok(())
    }
}

#[async_trait]
impl Subscriber for InMemoryBroker {
    async fn subscribe(&self, subject: Subject) -> Result<Subscription, SubscribeError> {
        let mut state = self.lock().map_err(SubscribeError::transport)?;
        if state.closed {
            return Err(SubscribeError::transport(BrokerClosed));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        state.subscribers.entry(subject).or_default().push(tx);
        Ok(Subscription::new(subject, rx))
    }
}
