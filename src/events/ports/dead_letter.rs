//! Sink for events whose handler failed.

use crate::events::domain::Subject;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Record of an event that a handler could not process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadLetter {
    /// Subject the event arrived on.
    pub subject: Subject,
    /// Envelope of the failed event.
    pub payload: Value,
    /// Rendered handler error.
    pub reason: String,
}

/// Error returned when a dead letter cannot be stored.
#[derive(Debug, Clone, Error)]
#[error("dead letter sink error: {0}")]
pub struct DeadLetterError(pub Arc<dyn std::error::Error + Send + Sync>);

impl DeadLetterError {
    /// Wraps a storage failure.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}

/// Storage for dead letters.
#[async_trait]
pub trait DeadLetterSink: Send + Sync {
    /// Stores one dead letter.
    async fn record(&self, letter: DeadLetter) -> Result<(), DeadLetterError>;
}
