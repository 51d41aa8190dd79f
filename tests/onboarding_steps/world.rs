//! Shared world state for onboarding BDD scenarios.

use std::time::Duration;

use rstest::fixture;
use taskmesh::config::{ServiceConfig, StorageConfig};
use taskmesh::events::{domain::Subject, ports::Publisher};
use taskmesh::runtime::ServiceRuntime;
use taskmesh::task::domain::Task;
use taskmesh::user::domain::UserId;

/// How long a step waits for an asynchronous reaction to land.
const REACTION_TIMEOUT: Duration = Duration::from_secs(2);

/// Scenario world for onboarding behaviour tests.
#[derive(Default)]
pub struct OnboardingWorld {
    pub runtime: Option<ServiceRuntime>,
    pub last_tasks: Vec<Task>,
}

impl OnboardingWorld {
    /// Returns the running runtime or an error when no Given step started
    /// one.
    pub fn runtime(&self) -> Result<&ServiceRuntime, eyre::Report> {
        self.runtime
            .as_ref()
            .ok_or_else(|| eyre::eyre!("task mesh has not been started in this scenario"))
    }

    /// Publishes a raw payload on `user.events`.
    pub fn publish_user_event(&self, payload: serde_json::Value) -> Result<(), eyre::Report> {
        let runtime = self.runtime()?;
        let bytes = serde_json::to_vec(&payload)?;
        run_async(runtime.broker().publish(Subject::UserEvents, bytes))?;
        Ok(())
    }

    /// Polls the task query side until `accept` holds for `user_id`'s
    /// tasks.
    pub fn wait_for_tasks(
        &self,
        user_id: UserId,
        accept: impl Fn(&[Task]) -> bool,
    ) -> Result<Vec<Task>, eyre::Report> {
        let runtime = self.runtime()?;
        run_async(async {
            let poll = async {
                loop {
                    let tasks = runtime
                        .task_queries()
                        .list_tasks_for_user(user_id)
                        .await?;
                    if accept(&tasks) {
                        return Ok::<_, eyre::Report>(tasks);
                    }
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
            };
            tokio::time::timeout(REACTION_TIMEOUT, poll)
                .await
                .map_err(|_| eyre::eyre!("tasks for user {user_id} never reached the expected state"))?
        })
    }
}

/// Builds the in-memory configuration used by every scenario.
pub fn memory_config() -> ServiceConfig {
    ServiceConfig {
        service_name: "taskmesh-bdd".to_owned(),
        user_service_url: None,
        storage: StorageConfig::Memory,
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> OnboardingWorld {
    OnboardingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
