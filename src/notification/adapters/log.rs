//! Notifier that only writes a log line.

use crate::notification::ports::{Notifier, NotifyError};
use crate::user::domain::UserId;
use async_trait::async_trait;
use tracing::info;

/// Stand-in notifier that delivers nothing and logs what it would send.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, recipient: UserId, message: &str) -> Result<(), NotifyError> {
        info!(%recipient, message, "notification sent");
        Ok(())
    }
}
