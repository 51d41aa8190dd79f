//! User record and validated creation input.

use super::{UserDomainError, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque credential stored exactly as supplied.
///
/// No hashing happens anywhere in the crate. The value is kept out of
/// `Debug` output so it does not end up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Wraps a raw credential.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw credential.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Validated user fields that do not yet have a store identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    password: Password,
}

impl NewUser {
    /// Validates and builds user input.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] for a blank name and
    /// [`UserDomainError::InvalidEmail`] when the email has no non-empty
    /// local part and domain around a single `@`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: Password,
    ) -> Result<Self, UserDomainError> {
        let raw_name = name.into();
        let trimmed_name = raw_name.trim();
        if trimmed_name.is_empty() {
            return Err(UserDomainError::EmptyName);
        }
        let email = validate_email(email.into())?;

        Ok(Self {
            name: trimmed_name.to_owned(),
            email,
            password,
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the credential.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Attaches a store-assigned identity.
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

fn validate_email(raw: String) -> Result<String, UserDomainError> {
    let trimmed = raw.trim();
    let mut parts = trimmed.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let is_valid = !local.is_empty()
        && !domain.is_empty()
        && parts.next().is_none()
        && !trimmed.chars().any(char::is_whitespace);

    if is_valid {
        Ok(trimmed.to_owned())
    } else {
        Err(UserDomainError::InvalidEmail(raw))
    }
}

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password: Password,
}

impl User {
    /// Rebuilds a user from stored columns without re-validating them.
    #[must_use]
    pub const fn from_persisted(id: UserId, name: String, email: String, password: Password) -> Self {
        Self {
            id,
            name,
            email,
            password,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the credential.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}
