//! Errors raised while moving events across the wire boundary.

use std::sync::Arc;
use thiserror::Error;

/// A payload could not be turned into a typed event.
#[derive(Debug, Clone, Error)]
pub enum EventDecodeError {
    /// The payload is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    Malformed(Arc<serde_json::Error>),

    /// The payload is JSON but not an object.
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// The action is known but the remaining fields do not fit it.
    #[error("invalid fields for action '{action}': {source}")]
    InvalidFields {
        /// Action named by the payload.
        action: String,
        /// Underlying deserialisation failure.
        source: Arc<serde_json::Error>,
    },
}

/// A typed event could not be serialised.
#[derive(Debug, Clone, Error)]
#[error("failed to encode event: {0}")]
pub struct EventEncodeError(pub Arc<serde_json::Error>);

impl From<serde_json::Error> for EventEncodeError {
    fn from(err: serde_json::Error) -> Self {
        Self(Arc::new(err))
    }
}
