//! Task repository behaviour against `PostgreSQL`.

use super::helpers::{BoxError, PgStores, draft, stores};
use rstest::rstest;
use taskmesh::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskCommandRepository, TaskQueryRepository, TaskRepositoryError},
};
use taskmesh::user::domain::UserId;

async fn stored_with_status(stores: &PgStores, status: TaskStatus) -> Result<Task, BoxError> {
    Ok(stores
        .task_commands
        .create(draft(1, "Status fixture").with_status(status))
        .await?)
}

fn with_status(task: &Task, status: TaskStatus) -> Task {
    draft(task.user_id().value(), task.title())
        .with_status(status)
        .with_id(task.id())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_visible_through_the_query_pool(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;

    let created = stores
        .task_commands
        .create(draft(7, "Write release notes").with_description("for 1.0"))
        .await?;

    let fetched = stores.task_queries.get_by_id(created.id()).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.status(), TaskStatus::ToDo);
    assert_eq!(fetched.assignee_id(), None);
    Ok(())
}

#[rstest]
#[case(TaskStatus::ToDo, TaskStatus::InProgress)]
#[case(TaskStatus::InProgress, TaskStatus::Completed)]
#[case(TaskStatus::Blocked, TaskStatus::ToDo)]
#[tokio::test(flavor = "multi_thread")]
async fn update_applies_allowed_transitions(
    stores: Result<PgStores, BoxError>,
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
) -> Result<(), BoxError> {
    let stores = stores?;
    let task = stored_with_status(&stores, from).await?;

    let updated = stores.task_commands.update(&with_status(&task, to)).await?;

    assert_eq!(updated.status(), to);
    assert_eq!(updated.created_at(), task.created_at());
    let fetched = stores.task_queries.get_by_id(task.id()).await?;
    assert_eq!(fetched.status(), to);
    Ok(())
}

#[rstest]
#[case(TaskStatus::ToDo)]
#[case(TaskStatus::InProgress)]
#[case(TaskStatus::Blocked)]
#[case(TaskStatus::Completed)]
#[tokio::test(flavor = "multi_thread")]
async fn completed_row_is_unchanged_after_a_rejected_update(
    stores: Result<PgStores, BoxError>,
    #[case] target: TaskStatus,
) -> Result<(), BoxError> {
    let stores = stores?;
    let task = stored_with_status(&stores, TaskStatus::Completed).await?;
    let replacement = draft(9, "Rewritten")
        .with_description("should not land")
        .with_assignee(Some(UserId::new(4)))
        .with_status(target)
        .with_id(task.id());

    let result = stores.task_commands.update(&replacement).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::InvalidTransition { task_id, from: TaskStatus::Completed, to })
            if task_id == task.id() && to == target
    ));
    let fetched = stores.task_queries.get_by_id(task.id()).await?;
    assert_eq!(fetched, task);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_row_is_not_found(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;
    let ghost = draft(1, "Ghost").with_id(TaskId::new(404));

    let result = stores.task_commands.update(&ghost).await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == ghost.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_with_no_affected_row_is_not_found(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;
    let missing = TaskId::new(77);

    let result = stores.task_commands.assign(missing, UserId::new(3)).await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == missing));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_touches_only_the_assignee(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;
    let task = stored_with_status(&stores, TaskStatus::Blocked).await?;

    stores.task_commands.assign(task.id(), UserId::new(3)).await?;

    let fetched = stores.task_queries.get_by_id(task.id()).await?;
    assert_eq!(fetched.assignee_id(), Some(UserId::new(3)));
    assert_eq!(fetched.status(), TaskStatus::Blocked);
    assert_eq!(fetched.title(), task.title());
    assert_eq!(fetched.created_at(), task.created_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigning_zero_clears_the_assignee(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;
    let task = stores
        .task_commands
        .create(draft(1, "Handed back").with_assignee(Some(UserId::new(4))))
        .await?;

    stores.task_commands.assign(task.id(), UserId::new(0)).await?;

    let fetched = stores.task_queries.get_by_id(task.id()).await?;
    assert_eq!(fetched.assignee_id(), None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_succeeds_and_leaves_nothing(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;
    let task = stores.task_commands.create(draft(1, "Doomed")).await?;

    stores.task_commands.delete(task.id()).await?;
    stores.task_commands.delete(task.id()).await?;

    let result = stores.task_queries.get_by_id(task.id()).await;
    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_all_by_user_removes_only_that_users_tasks(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;
    for title in ["a", "b"] {
        stores.task_commands.create(draft(1, title)).await?;
    }
    let kept = stores.task_commands.create(draft(2, "kept")).await?;

    let removed = stores.task_commands.delete_all_by_user(UserId::new(1)).await?;
    let removed_again = stores.task_commands.delete_all_by_user(UserId::new(1)).await?;

    assert_eq!(removed, 2);
    assert_eq!(removed_again, 0);
    assert!(stores.task_queries.list_by_user(UserId::new(1)).await?.is_empty());
    assert_eq!(stores.task_queries.list_by_user(UserId::new(2)).await?, vec![kept]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_by_user_returns_ascending_ids(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;
    let first = stores.task_commands.create(draft(5, "first")).await?;
    let second = stores.task_commands.create(draft(5, "second")).await?;

    let ids: Vec<TaskId> = stores
        .task_queries
        .list_by_user(UserId::new(5))
        .await?
        .iter()
        .map(Task::id)
        .collect();

    assert_eq!(ids, vec![first.id(), second.id()]);
    Ok(())
}
