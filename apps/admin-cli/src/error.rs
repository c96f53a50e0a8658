//! # Console Error Type
//!
//! Everything that ends an admin session early.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    What Stops the Console                               │
//! │                                                                         │
//! │  Storage failure during an operation                                   │
//! │       └──► never reaches here: ProductDao logs it, the loop goes on    │
//! │                                                                         │
//! │  Startup                                                                │
//! │       ├──► ConfigError (missing credentials) ── exit 1                 │
//! │       └──► DbError (database can't be opened) ─ exit 1                 │
//! │                                                                         │
//! │  Inside the loop                                                        │
//! │       ├──► ValidationError (non-numeric id/price) ── exit 1            │
//! │       └──► InputClosed / Io ──────────────────────── exit 1            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use northwind_core::ValidationError;
use northwind_db::DbError;
use thiserror::Error;

use crate::config::ConfigError;

/// Fatal console errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Input that could not be parsed into the field it was asked for.
    #[error("{0}")]
    InvalidInput(#[from] ValidationError),

    /// The console reached end of input while waiting for a line.
    #[error("Input closed while waiting for a selection")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
