//! Diesel row models for user persistence.

use super::schema::users;
use crate::user::domain::{NewUser, Password, User, UserId};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Stored credential.
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::from_persisted(
            UserId::new(row.id),
            row.name,
            row.email,
            Password::new(row.password),
        )
    }
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Credential stored as supplied.
    pub password: String,
}

impl From<&NewUser> for NewUserRow {
    fn from(user: &NewUser) -> Self {
        Self {
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            password: user.password().expose().to_owned(),
        }
    }
}

/// Changeset replacing every mutable user column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Credential stored as supplied.
    pub password: String,
}

impl From<&User> for UserChangeset {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            password: user.password().expose().to_owned(),
        }
    }
}
