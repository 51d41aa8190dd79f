//! Write-side orchestration for users.

use crate::events::{domain::UserEvent, ports::PublishError, services::EventPublisher};
use crate::user::{
    domain::{NewUser, Password, User, UserDomainError, UserId},
    ports::{UserCommandRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Client-supplied user fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRequest {
    name: String,
    email: String,
    password: Password,
}

impl UserRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: Password) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password,
        }
    }

    fn validate(self) -> Result<NewUser, UserDomainError> {
        NewUser::new(self.name, self.email, self.password)
    }
}

/// Errors returned by the user services.
#[derive(Debug, Clone, Error)]
pub enum UserServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// The repository rejected the operation.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// The write succeeded but its event could not be published.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Result type for user service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User command service.
///
/// Creation and deletion are announced on `user.events` after the write.
pub struct UserCommandService<R: UserCommandRepository + ?Sized> {
    commands: Arc<R>,
    events: EventPublisher,
}

impl<R: UserCommandRepository + ?Sized> Clone for UserCommandService<R> {
    fn clone(&self) -> Self {
        Self {
            commands: Arc::clone(&self.commands),
            events: self.events.clone(),
        }
    }
}

impl<R: UserCommandRepository + ?Sized> UserCommandService<R> {
    /// Creates a service over a command repository and a publisher.
    #[must_use]
    pub const fn new(commands: Arc<R>, events: EventPublisher) -> Self {
        Self { commands, events }
    }

    /// Creates a user and publishes `user_created`.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Domain`] for invalid input,
    /// [`UserServiceError::Repository`] when the write fails and
    /// [`UserServiceError::Publish`] when the event is not accepted.
    pub async fn create_user(&self, request: UserRequest) -> UserServiceResult<User> {
        let user = self.commands.create(request.validate()?).await?;
        info!(user_id = %user.id(), "user created");

        self.events
            .publish(&UserEvent::UserCreated { user_id: user.id() })
            .await?;
        Ok(user)
    }

    /// Replaces a user's fields.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Domain`] for invalid input and
    /// [`UserServiceError::Repository`] carrying `NotFound` when the user
    /// does not exist.
    pub async fn update_user(&self, id: UserId, request: UserRequest) -> UserServiceResult<User> {
        let replacement = request.validate()?.with_id(id);
        let user = self.commands.update(&replacement).await?;
        info!(user_id = %id, "user updated");
        Ok(user)
    }

    /// Deletes a user and publishes `user_deleted`.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the write fails and
    /// [`UserServiceError::Publish`] when the event is not accepted.
    pub async fn delete_user(&self, id: UserId) -> UserServiceResult<()> {
        self.commands.delete(id).await?;
        info!(user_id = %id, "user deleted");

        self.events
            .publish(&UserEvent::UserDeleted { user_id: id })
            .await?;
        Ok(())
    }
}
