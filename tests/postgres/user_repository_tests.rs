//! User repository behaviour against `PostgreSQL`.

use super::helpers::{BoxError, PgStores, stores};
use rstest::rstest;
use taskmesh::user::{
    domain::{NewUser, Password, User, UserId},
    ports::{UserCommandRepository, UserQueryRepository, UserRepositoryError},
    services::seed_users,
};

fn alice() -> NewUser {
    NewUser::new("Alice Johnson", "alice@example.com", Password::new("hashed_password_1"))
        .expect("valid user")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_user_round_trips_with_credential(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;

    let created = stores.user_commands.create(alice()).await?;
    let fetched = stores.user_queries.get_by_id(created.id()).await?;

    assert_eq!(fetched, created);
    assert_eq!(fetched.password().expose(), "hashed_password_1");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_fields_and_missing_row_is_not_found(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;
    let created = stores.user_commands.create(alice()).await?;
    let renamed = NewUser::new("Alice Cooper", "cooper@example.com", Password::new("pw"))?
        .with_id(created.id());

    let updated = stores.user_commands.update(&renamed).await?;
    let missing = User::from_persisted(
        UserId::new(999),
        "Nobody".to_owned(),
        "nobody@example.com".to_owned(),
        Password::new("pw"),
    );
    let ghost = stores.user_commands.update(&missing).await;

    assert_eq!(updated.name(), "Alice Cooper");
    assert_eq!(stores.user_queries.get_by_id(created.id()).await?, updated);
    assert!(matches!(ghost, Err(UserRepositoryError::NotFound(id)) if id == UserId::new(999)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_succeeds(stores: Result<PgStores, BoxError>) -> Result<(), BoxError> {
    let stores = stores?;
    let created = stores.user_commands.create(alice()).await?;

    stores.user_commands.delete(created.id()).await?;
    stores.user_commands.delete(created.id()).await?;

    let result = stores.user_queries.get_by_id(created.id()).await;
    assert!(matches!(result, Err(UserRepositoryError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_fills_an_empty_table_once(
    stores: Result<PgStores, BoxError>,
) -> Result<(), BoxError> {
    let stores = stores?;

    let first = seed_users(&stores.user_commands, &stores.user_queries).await?;
    let second = seed_users(&stores.user_commands, &stores.user_queries).await?;

    let names: Vec<String> = stores
        .user_queries
        .list_all()
        .await?
        .iter()
        .map(|user: &User| user.name().to_owned())
        .collect();
    assert_eq!(first, 5);
    assert_eq!(second, 0);
    assert_eq!(names.first().map(String::as_str), Some("Alice Johnson"));
    assert_eq!(names.len(), 5);
    Ok(())
}
