//! Handler port invoked for each decoded event.

use crate::events::domain::DomainEvent;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Failure reported by an event handler.
///
/// The dispatcher logs it and moves on; it is never surfaced to a
/// publisher.
#[derive(Clone)]
pub struct HandlerError(Arc<dyn std::error::Error + Send + Sync>);

impl HandlerError {
    /// Wraps the error that made the handler fail.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }

    /// Builds an error from a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(std::io::Error::other(message.into()))
    }
}

impl fmt::Debug for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandlerError").field(&self.0).finish()
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Reaction to events of one subject.
#[async_trait]
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    /// Handles a single decoded event.
    async fn handle(&self, event: E) -> Result<(), HandlerError>;
}
