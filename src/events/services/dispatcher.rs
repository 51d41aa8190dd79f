//! Subscription loop that decodes payloads and invokes a handler.

use crate::events::domain::{Decoded, DomainEvent, Envelope, Subject};
use crate::events::ports::{EventHandler, Subscription};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tracing::{debug, error, info, warn};

/// What happened to a single delivered payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler ran and succeeded.
    Handled,
    /// The handler ran and failed. The failure was logged.
    HandlerFailed,
    /// The action was missing or unknown. A warning was logged.
    Ignored,
    /// The payload could not be decoded. The payload was dropped.
    Malformed,
}

/// Routes payloads of one subject to one handler.
///
/// Dispatch never fails: every delivery is acknowledged whatever the
/// handler does, so processing is at most once per delivery.
pub struct Dispatcher<E: DomainEvent> {
    handler: Arc<dyn EventHandler<E>>,
}

impl<E: DomainEvent> Dispatcher<E> {
    /// Creates a dispatcher for `handler`.
    #[must_use]
    pub const fn new(handler: Arc<dyn EventHandler<E>>) -> Self {
        Self { handler }
    }

    /// Decodes one payload and runs the handler on it.
    pub async fn dispatch(&self, payload: &[u8]) -> DispatchOutcome {
        let subject = E::SUBJECT;
        let envelope = match Envelope::decode(payload) {
            Ok(envelope) => envelope,
            Err(err) => {
                error!(%subject, error = %err, "dropping malformed event payload");
                return DispatchOutcome::Malformed;
            }
        };

        let event = match E::from_envelope(envelope) {
            Ok(Decoded::Event(event)) => event,
            Ok(Decoded::MissingAction) => {
                warn!(%subject, "event has no action; ignoring");
                return DispatchOutcome::Ignored;
            }
            Ok(Decoded::UnknownAction(action)) => {
                warn!(%subject, %action, "unknown event action; ignoring");
                return DispatchOutcome::Ignored;
            }
            Err(err) => {
                error!(%subject, error = %err, "dropping malformed event payload");
                return DispatchOutcome::Malformed;
            }
        };

        let action = event.action();
        match self.handler.handle(event).await {
            Ok(()) => {
                debug!(%subject, action, "event handled");
                DispatchOutcome::Handled
            }
            Err(err) => {
                error!(%subject, action, error = %err, "event handler failed");
                DispatchOutcome::HandlerFailed
            }
        }
    }

    /// Consumes `subscription`, dispatching each payload on its own task.
    ///
    /// Returns once the subscription has closed and every delivery it
    /// started has finished.
    pub async fn run(self: Arc<Self>, mut subscription: Subscription) {
        let subject = subscription.subject();
        info!(%subject, "subscription loop started");
        let mut deliveries = JoinSet::new();
        while let Some(payload) = subscription.recv().await {
            let dispatcher = Arc::clone(&self);
            deliveries.spawn(async move { dispatcher.dispatch(&payload).await });
            while let Some(finished) = deliveries.try_join_next() {
                log_join_failure(subject, finished);
            }
        }

        let in_flight = deliveries.len();
        if in_flight > 0 {
            debug!(%subject, in_flight, "waiting for in-flight deliveries");
        }
        while let Some(finished) = deliveries.join_next().await {
            log_join_failure(subject, finished);
        }
        info!(%subject, "subscription loop stopped");
    }

    /// Spawns [`Self::run`] on the current runtime.
    #[must_use]
    pub fn spawn(self: Arc<Self>, subscription: Subscription) -> JoinHandle<()> {
        tokio::spawn(self.run(subscription))
    }
}

fn log_join_failure(subject: Subject, finished: Result<DispatchOutcome, JoinError>) {
    if let Err(err) = finished {
        error!(%subject, error = %err, "delivery task ended abnormally");
    }
}
