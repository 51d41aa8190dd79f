//! Store fixtures for the `PostgreSQL` tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use super::cluster::TemporaryDatabase;
use diesel::PgConnection;
use diesel::connection::SimpleConnection;
use mockable::DefaultClock;
use rstest::fixture;
use taskmesh::postgres::build_pool;
use taskmesh::task::adapters::postgres::{PostgresTaskCommand, PostgresTaskQuery};
use taskmesh::task::domain::NewTask;
use taskmesh::user::adapters::postgres::{PostgresUserCommand, PostgresUserQuery};
use taskmesh::user::domain::UserId;

const CREATE_USERS_SQL: &str =
    include_str!("../../migrations/2026-01-01-000000_create_users/up.sql");
const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2026-01-01-000001_create_tasks/up.sql");

fn apply_migrations(connection: &mut PgConnection) -> Result<(), BoxError> {
    connection.batch_execute(CREATE_USERS_SQL)?;
    connection.batch_execute(CREATE_TASKS_SQL)?;
    Ok(())
}

/// Command and query repositories over one scratch database.
///
/// The two sides use separate pools, as the runtime does.
pub struct PgStores {
    pub task_commands: PostgresTaskCommand,
    pub task_queries: PostgresTaskQuery,
    pub user_commands: PostgresUserCommand,
    pub user_queries: PostgresUserQuery,
    // Declared last so the pools close before the database is dropped.
    _database: TemporaryDatabase,
}

/// Opens repositories over a freshly migrated database.
#[fixture]
pub fn stores(postgres_cluster: Result<PostgresCluster, BoxError>) -> Result<PgStores, BoxError> {
    let cluster = postgres_cluster?;
    let database = cluster.temporary_database(apply_migrations)?;
    let command_pool = build_pool(database.url(), 2)?;
    let query_pool = build_pool(database.url(), 2)?;
    Ok(PgStores {
        task_commands: PostgresTaskCommand::new(command_pool.clone()),
        task_queries: PostgresTaskQuery::new(query_pool.clone()),
        user_commands: PostgresUserCommand::new(command_pool),
        user_queries: PostgresUserQuery::new(query_pool),
        _database: database,
    })
}

/// Builds an unassigned `ToDo` task draft owned by `owner`.
///
/// # Panics
///
/// Panics when `title` is blank.
pub fn draft(owner: i64, title: &str) -> NewTask {
    NewTask::new(UserId::new(owner), title, &DefaultClock).expect("valid title")
}
