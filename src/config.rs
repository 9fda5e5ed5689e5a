//! Runtime configuration loaded from environment variables.

use crate::error::ConfigError;
use crate::store::{RetryPolicy, StoreBackend};
use std::str::FromStr;
use std::time::Duration;

/// Server and storage settings. All fields have defaults suitable for local development.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: StoreBackend,
    pub database_url: String,
    pub max_connections: u32,
    pub retry: RetryPolicy,
    pub request_body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            backend: StoreBackend::Postgres,
            database_url: "postgres://localhost/widgets".into(),
            max_connections: 5,
            retry: RetryPolicy::default(),
            request_body_limit: 64 * 1024,
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                        |
    /// |----------------------------|--------------------------------|
    /// | `HOST`                     | `0.0.0.0`                      |
    /// | `PORT`                     | `3000`                         |
    /// | `WIDGET_STORE`             | `postgres` (or `memory`)       |
    /// | `DATABASE_URL`             | `postgres://localhost/widgets` |
    /// | `DB_MAX_CONNECTIONS`       | `5`                            |
    /// | `DB_MAX_RETRIES`           | `2`                            |
    /// | `DB_RETRY_BASE_DELAY_MS`   | `100`                          |
    /// | `DB_MAX_RETRY_DELAY_SECS`  | `10`                           |
    /// | `REQUEST_BODY_LIMIT_BYTES` | `65536`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let backend = match lookup("WIDGET_STORE") {
            Some(v) => v.parse::<StoreBackend>()?,
            None => defaults.backend,
        };
        let retry = RetryPolicy::default()
            .with_max_retries(parse_or(&lookup, "DB_MAX_RETRIES", defaults.retry.max_retries)?)
            .with_base_delay(Duration::from_millis(parse_or(
                &lookup,
                "DB_RETRY_BASE_DELAY_MS",
                defaults.retry.base_delay.as_millis() as u64,
            )?))
            .with_max_delay(Duration::from_secs(parse_or(
                &lookup,
                "DB_MAX_RETRY_DELAY_SECS",
                defaults.retry.max_delay.as_secs(),
            )?));

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            backend,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            retry,
            request_body_limit: parse_or(&lookup, "REQUEST_BODY_LIMIT_BYTES", defaults.request_body_limit)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
