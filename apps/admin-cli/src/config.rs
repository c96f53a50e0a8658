//! Admin console configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `username` | yes | |
//! | `password` | yes | |
//! | `NORTHWIND_DB_PATH` | no | `<data dir>/northwind.db` |
//! | `NORTHWIND_DB_MAX_CONNECTIONS` | no | `5` |
//!
//! SQLite does not authenticate connections. The credential pair still has to
//! be present before the console starts, and the username is logged as the
//! operator of the session.

use directories::ProjectDirs;
use std::env;
use std::fmt;
use std::path::PathBuf;

pub const USERNAME_VAR: &str = "username";
pub const PASSWORD_VAR: &str = "password";
pub const DB_PATH_VAR: &str = "NORTHWIND_DB_PATH";
pub const MAX_CONNECTIONS_VAR: &str = "NORTHWIND_DB_MAX_CONNECTIONS";

/// Admin console configuration.
#[derive(Clone)]
pub struct AdminConfig {
    /// Database user name
    pub username: String,

    /// Database password
    pub password: String,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Connection pool size
    pub max_connections: u32,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingRequired(key.to_string()))
        };

        let username = required(USERNAME_VAR)?;
        let password = required(PASSWORD_VAR)?;

        let database_path = match lookup(DB_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_database_path()?,
        };

        let max_connections = lookup(MAX_CONNECTIONS_VAR)
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .ok()
            .filter(|max| *max > 0)
            .ok_or_else(|| ConfigError::InvalidValue(MAX_CONNECTIONS_VAR.to_string()))?;

        Ok(AdminConfig {
            username,
            password,
            database_path,
            max_connections,
        })
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database_path", &self.database_path)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Platform data directory location for the database file.
///
/// - **macOS**: `~/Library/Application Support/com.northwind.admin/northwind.db`
/// - **Windows**: `%APPDATA%\northwind\admin\data\northwind.db`
/// - **Linux**: `~/.local/share/admin/northwind.db`
fn default_database_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("com", "northwind", "admin").ok_or(ConfigError::NoDataDirectory)?;
    Ok(dirs.data_dir().join("northwind.db"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine app data directory; set NORTHWIND_DB_PATH")]
    NoDataDirectory,
}
