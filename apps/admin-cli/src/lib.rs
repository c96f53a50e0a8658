//! # Northwind Admin Console
//!
//! Console tool for listing, adding, deleting, searching and updating rows of
//! the `Products` table.
//!
//! ## Module Organization
//! ```text
//! northwind_admin/
//! ├── lib.rs          ◄─── You are here (startup sequence)
//! ├── config.rs       ◄─── Environment configuration
//! ├── console.rs      ◄─── Menu loop and prompts
//! ├── menu.rs         ◄─── Menu text and command codes
//! └── error.rs        ◄─── Fatal console errors
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod menu;

use std::fs;
use std::io::{self, Write};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{AdminConfig, ConfigError};
use console::Console;
use error::CliError;
use northwind_db::{Database, DbConfig};

/// Runs one admin session against the configured database.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stdout             │
/// │     • Default: WARN, northwind crates at INFO; RUST_LOG overrides       │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • username / password must be set                                   │
/// │     • NORTHWIND_DB_PATH or the platform data directory                  │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite pool, Products table created if missing                    │
/// │                                                                         │
/// │  4. Run the Menu Loop ────────────────────────────────────────────────► │
/// │     • stdin / stdout until "0) Exit"                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), CliError> {
    init_tracing();

    let config = AdminConfig::load()?;
    info!(
        operator = %config.username,
        path = %config.database_path.display(),
        "Configuration loaded"
    );

    if let Some(parent) = config.database_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let db_config = DbConfig::new(&config.database_path).max_connections(config.max_connections);
    let db = Database::new(db_config).await?;

    let stdin = io::stdin();
    let mut console = Console::new(db.product_dao(), stdin.lock(), io::stdout());
    let result = console.run().await;

    db.close().await;
    result
}

/// Maps the outcome of [`run`] to a process exit status.
///
/// ## Exit Codes
/// - `0` - The user chose `0) Exit`
/// - `1` - Credentials missing: `Env: File not configured correctly` is
///   written to `out` first
/// - `1` - Any other fatal error (unparseable number, closed input, database
///   unavailable at startup), logged at ERROR
pub fn exit_status(result: Result<(), CliError>, out: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(CliError::Config(ConfigError::MissingRequired(key))) => {
            // The exit status is still 1 if stdout is gone
            let _ = writeln!(out, "Env: File not configured correctly");
            let _ = out.flush();
            error!(variable = %key, "Missing database credentials");
            1
        }
        Err(e) => {
            error!(error = %e, "Admin console stopped");
            1
        }
    }
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every statement
/// - `RUST_LOG=northwind_db=debug` - Only the database layer
/// - Default: WARN, plus INFO for northwind crates
///
/// Storage errors swallowed by `ProductDao` are logged at ERROR and land on
/// stdout between menu prompts.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,northwind_db=info,northwind_admin=info,sqlx=warn"));

    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout)
        .try_init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use northwind_core::ValidationError;

    fn status_of(result: Result<(), CliError>) -> (u8, String) {
        let mut out = Vec::new();
        let status = exit_status(result, &mut out);
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_clean_exit_is_zero() {
        assert_eq!(status_of(Ok(())), (0, String::new()));
    }

    #[test]
    fn test_missing_credentials_print_message_and_exit_one() {
        let missing = AdminConfig::from_lookup(|_| None).unwrap_err();

        let (status, printed) = status_of(Err(missing.into()));

        assert_eq!(status, 1);
        assert_eq!(printed, "Env: File not configured correctly\n");
    }

    #[test]
    fn test_invalid_input_exits_one_without_message() {
        let invalid = ValidationError::not_an_integer("product id", "abc");

        let (status, printed) = status_of(Err(invalid.into()));

        assert_eq!(status, 1);
        assert!(printed.is_empty());
    }

    #[test]
    fn test_closed_input_exits_one() {
        assert_eq!(status_of(Err(CliError::InputClosed)).0, 1);
    }
}
