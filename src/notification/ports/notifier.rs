//! Outbound notification port.

use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Error returned when a notification cannot be delivered.
#[derive(Debug, Clone, Error)]
#[error("notification delivery failed: {0}")]
pub struct NotifyError(pub Arc<dyn std::error::Error + Send + Sync>);

impl NotifyError {
    /// Wraps a delivery failure.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}

/// Delivers a message to a user.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message` to `recipient`.
    async fn send(&self, recipient: UserId, message: &str) -> Result<(), NotifyError>;
}
