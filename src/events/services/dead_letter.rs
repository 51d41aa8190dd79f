//! Handler decorator that records failures to a dead-letter sink.

use crate::events::domain::{DomainEvent, Envelope};
use crate::events::ports::{DeadLetter, DeadLetterSink, EventHandler, HandlerError};
use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

/// Wraps a handler so that failed events are written to a sink.
///
/// The wrapped handler's error is still returned, so the dispatcher logs
/// and acknowledges exactly as it would without the decorator.
pub struct DeadLetterHandler<H, S> {
    inner: H,
    sink: S,
}

impl<H, S> DeadLetterHandler<H, S> {
    /// Decorates `inner`, recording its failures to `sink`.
    #[must_use]
    pub const fn new(inner: H, sink: S) -> Self {
        Self { inner, sink }
    }
}

#[async_trait]
impl<E, H, S> EventHandler<E> for DeadLetterHandler<H, S>
where
    E: DomainEvent,
    H: EventHandler<E>,
    S: DeadLetterSink,
{
    async fn handle(&self, event: E) -> Result<(), HandlerError> {
        let payload = event
            .to_envelope()
            .map_or(Value::Null, Envelope::into_value);

        let Err(err) = self.inner.handle(event).await else {
            return Ok(());
        };

        let letter = DeadLetter {
            subject: E::SUBJECT,
            payload,
            reason: err.to_string(),
        };
        if let Err(sink_err) = self.sink.record(letter).await {
            warn!(subject = %E::SUBJECT, error = %sink_err, "failed to record dead letter");
        }
        Err(err)
    }
}
