use std::str::FromStr;
use std::time::Duration;

use rickdex_db::{StoreConfig, DEFAULT_OPERATION_TIMEOUT};

/// Raised when the environment cannot produce a usable [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the MongoDB connection string has a default suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Whole-request timeout in seconds (default: `15`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal (default: `10`).
    pub shutdown_timeout_secs: u64,
    /// Collection location and per-call timeout.
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default         |
    /// |-------------------------|-----------------|
    /// | `MONGO_URL`             | required        |
    /// | `MONGO_DATABASE`        | `rickAndMorty`  |
    /// | `MONGO_COLLECTION`      | `characters`    |
    /// | `HOST`                  | `0.0.0.0`       |
    /// | `PORT`                  | `8000`          |
    /// | `REQUEST_TIMEOUT_SECS`  | `15`            |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `10`            |
    /// | `DB_TIMEOUT_SECS`       | `10`            |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("MONGO_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("MONGO_URL"))?;

        let text = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let db_timeout_secs: u64 = parse_or(
            &lookup,
            "DB_TIMEOUT_SECS",
            DEFAULT_OPERATION_TIMEOUT.as_secs(),
            "u64",
        )?;

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 8000, "u16")?,
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 15, "u64")?,
            shutdown_timeout_secs: parse_or(&lookup, "SHUTDOWN_TIMEOUT_SECS", 10, "u64")?,
            store: StoreConfig {
                url,
                database: text("MONGO_DATABASE", "rickAndMorty"),
                collection: text("MONGO_COLLECTION", "characters"),
                operation_timeout: Duration::from_secs(db_timeout_secs),
            },
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}
