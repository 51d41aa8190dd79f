//! When steps for onboarding BDD scenarios.

use super::world::OnboardingWorld;
use rstest_bdd_macros::when;
use serde_json::json;

#[when("a user_created event for user {user_id:i64} is published")]
fn user_created_published(world: &mut OnboardingWorld, user_id: i64) -> Result<(), eyre::Report> {
    world.publish_user_event(json!({"action": "user_created", "user_id": user_id}))
}

#[when("a user_deleted event for user {user_id:i64} is published")]
fn user_deleted_published(world: &mut OnboardingWorld, user_id: i64) -> Result<(), eyre::Report> {
    world.publish_user_event(json!({"action": "user_deleted", "user_id": user_id}))
}

#[when(r#"an event with action "{action}" is published on user events"#)]
fn unknown_action_published(
    world: &mut OnboardingWorld,
    action: String,
) -> Result<(), eyre::Report> {
    world.publish_user_event(json!({"action": action}))
}
