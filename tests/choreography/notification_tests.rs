//! The notification context reacting to task events.

use super::helpers::{config, next_recipient, start_runtime};
use rstest::rstest;
use taskmesh::config::ServiceConfig;
use taskmesh::task::services::{TaskRequest, TaskServiceError};
use taskmesh::task::ports::UserLookupError;
use taskmesh::user::domain::{Password, UserId};
use taskmesh::user::services::UserRequest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creating_a_task_notifies_its_owner(config: ServiceConfig) {
    let (runtime, mut notifications) = start_runtime(&config, false).await;

    runtime
        .task_commands()
        .create_task(TaskRequest::new(UserId::new(7), "Write report"))
        .await
        .expect("create task");

    assert_eq!(next_recipient(&mut notifications).await, UserId::new(7));
    runtime.shutdown().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigning_a_task_notifies_the_assignee(config: ServiceConfig) {
    let (runtime, mut notifications) = start_runtime(&config, false).await;
    let assignee = runtime
        .user_commands()
        .create_user(UserRequest::new("Ada", "ada@example.com", Password::new("pw")))
        .await
        .expect("create user");
    let task = runtime
        .task_commands()
        .create_task(TaskRequest::new(UserId::new(1), "Review"))
        .await
        .expect("create task");
    assert_eq!(next_recipient(&mut notifications).await, UserId::new(1));

    runtime
        .task_commands()
        .assign_task(task.id(), assignee.id())
        .await
        .expect("assign");

    assert_eq!(next_recipient(&mut notifications).await, assignee.id());
    let stored = runtime
        .task_queries()
        .get_task(task.id())
        .await
        .expect("lookup");
    assert_eq!(stored.assignee_id(), Some(assignee.id()));
    runtime.shutdown().await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigning_to_an_unknown_user_is_rejected(config: ServiceConfig) {
    let (runtime, _notifications) = start_runtime(&config, false).await;
    let task = runtime
        .task_commands()
        .create_task(TaskRequest::new(UserId::new(1), "Review"))
        .await
        .expect("create task");

    let result = runtime
        .task_commands()
        .assign_task(task.id(), UserId::new(999))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Lookup(UserLookupError::NotFound { .. }))
    ));
    runtime.shutdown().await;
}
