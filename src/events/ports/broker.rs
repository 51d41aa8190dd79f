//! Broker ports for publishing and subscribing to subjects.

use crate::events::domain::{EventEncodeError, Subject};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors returned when a payload cannot be handed to the broker.
#[derive(Debug, Clone, Error)]
pub enum PublishError {
    /// The broker rejected or could not receive the payload.
    #[error("broker transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The event could not be serialised.
    #[error(transparent)]
    Encode(#[from] EventEncodeError),
}

impl PublishError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

/// Errors returned when a subscription cannot be opened.
#[derive(Debug, Clone, Error)]
pub enum SubscribeError {
    /// The broker could not register the subscription.
    #[error("broker transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl SubscribeError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

/// Hands raw payloads to the broker.
///
/// Returning `Ok` means the broker accepted the payload. It says nothing
/// about whether any subscriber received it.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes `payload` on `subject`.
    async fn publish(&self, subject: Subject, payload: Vec<u8>) -> Result<(), PublishError>;
}

/// Opens subscriptions on the broker.
#[async_trait]
pub trait Subscriber: Send + Sync {
    /// Subscribes to `subject`. Only payloads published afterwards are
    /// delivered.
    async fn subscribe(&self, subject: Subject) -> Result<Subscription, SubscribeError>;
}

/// Stream of raw payloads delivered for one subject.
#[derive(Debug)]
pub struct Subscription {
    subject: Subject,
    receiver: mpsc::UnboundedReceiver<Vec<u8>>,
}

impl Subscription {
    /// Wraps the receiving half of a delivery channel.
    #[must_use]
    pub const fn new(subject: Subject, receiver: mpsc::UnboundedReceiver<Vec<u8>>) -> Self {
        Self { subject, receiver }
    }

    /// Returns the subscribed subject.
    #[must_use]
    pub const fn subject(&self) -> Subject {
        self.subject
    }

    /// Waits for the next payload. Returns `None` once the broker side
    /// has closed and every buffered payload was taken.
    pub async fn recv(&mut self) -> Option<Vec<u8>> {
        self.receiver.recv().await
    }
}
