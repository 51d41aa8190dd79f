//! Shared runtime fixtures and polling helpers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use mockall::mock;
use rstest::fixture;
use taskmesh::config::{ServiceConfig, StorageConfig};
use taskmesh::notification::ports::{Notifier, NotifyError};
use taskmesh::runtime::ServiceRuntime;
use taskmesh::user::domain::UserId;
use tokio::sync::mpsc;

mock! {
    pub Notifier {}

    #[async_trait::async_trait]
    impl Notifier for Notifier {
        async fn send(&self, recipient: UserId, message: &str) -> Result<(), NotifyError>;
    }
}

/// Upper bound on how long a test waits for an asynchronous reaction.
pub const REACTION_TIMEOUT: Duration = Duration::from_secs(2);

/// Builds an in-memory configuration without a remote user service.
#[fixture]
pub fn config() -> ServiceConfig {
    ServiceConfig {
        service_name: "taskmesh-test".to_owned(),
        user_service_url: None,
        storage: StorageConfig::Memory,
    }
}

/// Returns a notifier that forwards every recipient to the returned
/// receiver, and fails when `fail` is set.
pub fn forwarding_notifier(fail: bool) -> (Arc<MockNotifier>, mpsc::UnboundedReceiver<UserId>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut notifier = MockNotifier::new();
    notifier.expect_send().returning(move |recipient, _| {
        tx.send(recipient).ok();
        if fail {
            Err(NotifyError::new(std::io::Error::other("mailer offline")))
        } else {
            Ok(())
        }
    });
    (Arc::new(notifier), rx)
}

/// Starts a runtime whose notifications go to a forwarding mock.
pub async fn start_runtime(
    config: &ServiceConfig,
    fail_notifications: bool,
) -> (ServiceRuntime, mpsc::UnboundedReceiver<UserId>) {
    let (notifier, rx) = forwarding_notifier(fail_notifications);
    let runtime = ServiceRuntime::start_with_notifier(config, notifier)
        .await
        .expect("runtime should start");
    (runtime, rx)
}

/// Waits for the next notified recipient.
pub async fn next_recipient(rx: &mut mpsc::UnboundedReceiver<UserId>) -> UserId {
    tokio::time::timeout(REACTION_TIMEOUT, rx.recv())
        .await
        .expect("a notification should arrive in time")
        .expect("notifier channel should stay open")
}

/// Polls `check` until it yields `Some`, or panics after
/// [`REACTION_TIMEOUT`].
pub async fn eventually<T, F, Fut>(mut check: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let poll = async {
        loop {
            if let Some(value) = check().await {
                return value;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    };
    tokio::time::timeout(REACTION_TIMEOUT, poll)
        .await
        .expect("condition should hold before the timeout")
}
