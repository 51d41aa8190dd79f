//! Runtime configuration loaded from prefixed environment variables.
//!
//! Every key is read as `<PREFIX>_<KEY>`, for example
//! `TASKMESH_DATABASE_URL`.

use std::num::NonZeroU32;
use thiserror::Error;

/// Default number of connections per `PostgreSQL` pool.
pub const DEFAULT_POOL_SIZE: NonZeroU32 = NonZeroU32::MIN.saturating_add(4);

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing environment variable: {0}")]
    Missing(String),

    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {key}: {message}")]
    Invalid {
        /// Full variable name.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Where the command and query stores live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Process-local stores; nothing survives a restart.
    Memory,
    /// `PostgreSQL` through two separate connection pools.
    Postgres {
        /// Connection URL.
        url: String,
        /// Maximum connections per pool.
        pool_size: NonZeroU32,
    },
}

/// Settings for one running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Name reported in logs.
    pub service_name: String,
    /// Base URL of a remote user service. When unset, assignees are checked
    /// against the local user store.
    pub user_service_url: Option<String>,
    /// Backing storage.
    pub storage: StorageConfig,
}

impl ServiceConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `<PREFIX>_SERVICE_NAME` is not
    /// set and [`ConfigError::Invalid`] when a value cannot be parsed.
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a full variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// As for [`Self::from_env`].
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let reader = Reader { prefix, lookup };

        let service_name = reader.required("SERVICE_NAME")?;
        let user_service_url = reader.optional("USER_SERVICE_URL");
        let storage = match reader.optional("DATABASE_URL") {
            None => StorageConfig::Memory,
            Some(url) => StorageConfig::Postgres {
                url,
                pool_size: reader.parsed("DATABASE_POOL_SIZE", DEFAULT_POOL_SIZE)?,
            },
        };

        Ok(Self {
            service_name,
            user_service_url,
            storage,
        })
    }
}

struct Reader<'a, F> {
    prefix: &'a str,
    lookup: F,
}

impl<F> Reader<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn key(&self, name: &str) -> String {
        format!("{}_{name}", self.prefix)
    }

    fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(&self.key(name)).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::Missing(self.key(name)))
    }

    fn parsed<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(raw) = self.optional(name) else {
            return Ok(default);
        };
        raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
            key: self.key(name),
            message: err.to_string(),
        })
    }
}
