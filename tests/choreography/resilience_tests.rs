//! Bad payloads and failing handlers never stop a subscription loop.

use super::helpers::{config, eventually, next_recipient, start_runtime};
use async_trait::async_trait;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use taskmesh::config::ServiceConfig;
use taskmesh::events::{domain::Subject, ports::Publisher};
use taskmesh::notification::ports::{Notifier, NotifyError};
use taskmesh::runtime::ServiceRuntime;
use taskmesh::task::services::TaskRequest;
use taskmesh::user::domain::UserId;

#[derive(Default)]
struct SlowNotifier {
    delivered: AtomicUsize,
}

#[async_trait]
impl Notifier for SlowNotifier {
    async fn send(&self, _recipient: UserId, _message: &str) -> Result<(), NotifyError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        self.delivered.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn garbage_does_not_stop_later_events(config: ServiceConfig) {
    let (runtime, _notifications) = start_runtime(&config, false).await;
    let broker = runtime.broker();

    for payload in [
        b"not json".to_vec(),
        br#"{"action":"totally_unknown"}"#.to_vec(),
        br#"{"action":"user_created","user_id":"forty"}"#.to_vec(),
        br#"{"action":"user_created","user_id":5}"#.to_vec(),
    ] {
        broker
            .publish(Subject::UserEvents, payload)
            .await
            .expect("publish");
    }

    let tasks = eventually(|| async {
        let tasks = runtime
            .task_queries()
            .list_tasks_for_user(UserId::new(5))
            .await
            .ok()?;
        (!tasks.is_empty()).then_some(tasks)
    })
    .await;
    assert_eq!(tasks.len(), 1);
    assert!(runtime.dead_letters().is_empty());
    runtime.shutdown().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_notification_is_dead_lettered_and_the_write_stands(config: ServiceConfig) {
    let (runtime, mut notifications) = start_runtime(&config, true).await;

    let task = runtime
        .task_commands()
        .create_task(TaskRequest::new(UserId::new(3), "Unlucky"))
        .await
        .expect("create task succeeds even though notification fails");
    assert_eq!(next_recipient(&mut notifications).await, UserId::new(3));

    let letters = eventually(|| async {
        let letters = runtime.dead_letters();
        (!letters.is_empty()).then_some(letters)
    })
    .await;

    let letter = letters.first().expect("one dead letter");
    assert_eq!(letter.subject, Subject::TaskEvents);
    assert_eq!(
        letter.payload,
        json!({"action": "task_created", "user_id": 3, "task_id": task.id().value()})
    );
    assert!(letter.reason.contains("mailer offline"));
    assert!(runtime.task_queries().get_task(task.id()).await.is_ok());
    assert_eq!(runtime.take_dead_letters().len(), 1);
    assert!(runtime.dead_letters().is_empty());
    runtime.shutdown().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shutdown_waits_for_in_flight_notifications(config: ServiceConfig) {
    let notifier = Arc::new(SlowNotifier::default());
    let runtime = ServiceRuntime::start_with_notifier(&config, notifier.clone())
        .await
        .expect("runtime should start");

    runtime
        .task_commands()
        .create_task(TaskRequest::new(UserId::new(7), "Slow mail"))
        .await
        .expect("create task");
    runtime.shutdown().await;

    assert_eq!(notifier.delivered.load(Ordering::SeqCst), 1);
}
