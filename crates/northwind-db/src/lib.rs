//! # northwind-db: Database Layer for Northwind Admin
//!
//! Database access for the `Products` table, using SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Northwind Admin Data Flow                        │
//! │                                                                         │
//! │  Console menu option (e.g. "4) Search For Product")                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   northwind-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  ProductDao   │    │   schema     │  │   │
//! │  │   │   (pool.rs)   │    │   (dao.rs)    │    │  Products    │  │   │
//! │  │   │               │    │       │       │    │  bootstrap   │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (northwind.db)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Products table bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - Strict, `Result`-returning SQL
//! - [`dao`] - The log-and-continue data access object the console uses
//!
//! ## Usage
//!
//! ```rust,ignore
//! use northwind_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("northwind.db")).await?;
//!
//! let dao = db.product_dao();
//! let everything = dao.get_all().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dao;
pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use dao::ProductDao;
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
