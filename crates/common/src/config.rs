//! Configuration management following 12-factor app principles
//!
//! Configuration is read from an env-style file (`KEY=value` lines) whose path
//! is supplied on the command line. Variables already present in the process
//! environment take precedence over the file, so deployments can override
//! individual keys without editing it.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_NAME: &str = "DB_NAME";
pub const PORT: &str = "PORT";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";

/// Keys that must be present before the service is allowed to start
pub const REQUIRED_KEYS: &[&str] = &[DB_USER, DB_PASSWORD, DB_HOST, DB_PORT, DB_NAME, PORT];

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the relational store
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Relational store connection settings
    pub database: DatabaseConfig,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Upper bound on the time a single request may take
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from an env-style file, letting process environment
    /// variables override values from the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = read_env_file(path)?;
        tracing::debug!(path = %path.display(), keys = file.len(), "Read configuration file");

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    /// Resolve configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| anyhow::anyhow!("{key} is required"));

        if let Some(missing) = REQUIRED_KEYS.iter().copied().find(|key| lookup(key).is_none()) {
            anyhow::bail!("{missing} is required");
        }

        let database = DatabaseConfig {
            host: required(DB_HOST)?,
            port: parse_port(DB_PORT, &required(DB_PORT)?)?,
            user: required(DB_USER)?,
            password: required(DB_PASSWORD)?,
            name: required(DB_NAME)?,
        };

        let request_timeout = match lookup(REQUEST_TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "{REQUEST_TIMEOUT_SECS} must be a positive number of seconds, got '{raw}'"
                    )
                })?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            database,
            port: parse_port(PORT, &required(PORT)?)?,
            request_timeout,
        })
    }
}

/// Parse an env-style file into a key/value map without touching the
/// process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    dotenvy::from_path_iter(path)
        .with_context(|| format!("error reading config file {}", path.display()))?
        .map(|item| item.with_context(|| format!("malformed line in {}", path.display())))
        .collect()
}

fn parse_port(key: &str, raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("{key} must be a valid port number, got '{raw}'"))
}
