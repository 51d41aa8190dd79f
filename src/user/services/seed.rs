//! Sample users for an empty store.

use super::UserServiceResult;
use crate::user::{
    domain::{NewUser, Password},
    ports::{UserCommandRepository, UserQueryRepository},
};
use tracing::info;

const SAMPLE_USERS: [(&str, &str, &str); 5] = [
    ("Alice Johnson", "alice.johnson@example.com", "hashed_password_1"),
    ("Bob Smith", "bob.smith@example.com", "hashed_password_2"),
    ("Charlie Brown", "charlie.brown@example.com", "hashed_password_3"),
    ("Diana Prince", "diana.prince@example.com", "hashed_password_4"),
    ("Ethan Hunt", "ethan.hunt@example.com", "hashed_password_5"),
];

/// Inserts the sample users when the store holds no users.
///
/// Writes go straight to the repository, so no `user_created` events are
/// published and no onboarding tasks follow. Returns how many users were
/// inserted.
///
/// # Errors
///
/// Returns [`super::UserServiceError::Repository`] when a read or write fails.
pub async fn seed_users<C, Q>(commands: &C, queries: &Q) -> UserServiceResult<usize>
where
    C: UserCommandRepository + ?Sized,
    Q: UserQueryRepository + ?Sized,
{
    if !queries.list_all().await?.is_empty() {
        return Ok(0);
    }

    for (name, email, password) in SAMPLE_USERS {
        let user = NewUser::new(name, email, Password::new(password))?;
        commands.create(user).await?;
    }
    info!(count = SAMPLE_USERS.len(), "seeded sample users");
    Ok(SAMPLE_USERS.len())
}
