//! HTTP client for the user service.

use crate::task::ports::{UserDirectory, UserLookupError, UserLookupResult};
use crate::user::domain::{Password, User, UserId};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

/// [`UserDirectory`] that fetches `GET {base_url}/users/{id}`.
///
/// Any status other than `200 OK` is reported as
/// [`UserLookupError::NotFound`] carrying the status received.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: String,
}

/// Body returned by the user service. The credential may be omitted.
#[derive(Debug, Deserialize)]
struct UserResponse {
    id: i64,
    name: String,
    email: String,
    #[serde(default)]
    password: String,
}

impl UserResponse {
    fn into_user(self) -> User {
        User::from_persisted(
            UserId::new(self.id),
            self.name,
            self.email,
            Password::new(self.password),
        )
    }
}

impl HttpUserDirectory {
    /// Creates a directory rooted at `base_url`. A trailing slash is
    /// ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a directory that sends requests through `client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self {
            client,
            base_url: raw.trim_end_matches('/').to_owned(),
        }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_user_by_id(&self, id: UserId) -> UserLookupResult<User> {
        let url = format!("{}/users/{id}", self.base_url);
        debug!(%url, "looking up user");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(UserLookupError::unreachable)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UserLookupError::NotFound {
                user_id: id,
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<UserResponse>()
            .await
            .map_err(UserLookupError::decode)?;
        Ok(body.into_user())
    }
}
