//! Then steps for onboarding BDD scenarios.

use super::world::OnboardingWorld;
use rstest_bdd_macros::then;
use taskmesh::task::domain::TaskStatus;
use taskmesh::user::domain::UserId;

#[then("user {user_id:i64} has exactly one task")]
fn user_has_one_task(world: &mut OnboardingWorld, user_id: i64) -> Result<(), eyre::Report> {
    let tasks = world.wait_for_tasks(UserId::new(user_id), |tasks| !tasks.is_empty())?;
    if tasks.len() != 1 {
        return Err(eyre::eyre!("expected one task, found {}", tasks.len()));
    }
    world.last_tasks = tasks;
    Ok(())
}

#[then("user {user_id:i64} has no tasks")]
fn user_has_no_tasks(world: &mut OnboardingWorld, user_id: i64) -> Result<(), eyre::Report> {
    world.wait_for_tasks(UserId::new(user_id), <[_]>::is_empty)?;
    Ok(())
}

#[then(r#"that task is assigned to user {user_id:i64} with title "{title}""#)]
fn task_assigned_with_title(
    world: &OnboardingWorld,
    user_id: i64,
    title: String,
) -> Result<(), eyre::Report> {
    let task = world
        .last_tasks
        .first()
        .ok_or_else(|| eyre::eyre!("no task captured by an earlier step"))?;
    if task.assignee_id() != Some(UserId::new(user_id)) {
        return Err(eyre::eyre!(
            "expected assignee {user_id}, found {:?}",
            task.assignee_id()
        ));
    }
    if task.title() != title {
        return Err(eyre::eyre!("expected title {title:?}, found {:?}", task.title()));
    }
    Ok(())
}

#[then(r#"that task has status "{status}""#)]
fn task_has_status(world: &OnboardingWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world
        .last_tasks
        .first()
        .ok_or_else(|| eyre::eyre!("no task captured by an earlier step"))?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}
