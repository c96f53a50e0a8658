//! # Products Table Bootstrap
//!
//! Creates the `Products` table on a fresh database file.
//!
//! There is no version table and no upgrade path: the statement is
//! `CREATE TABLE IF NOT EXISTS`, so an existing Northwind database (with its
//! own `Products` definition) is left exactly as it is.
//!
//! ## Column Affinities
//! `UnitPrice` is declared `REAL` so SQLite always hands it back as a float.
//! Queries still read it through `CAST(UnitPrice AS REAL)` because imported
//! Northwind files declare it `NUMERIC`, where `18.00` is stored as the
//! integer `18`.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// DDL for the single table this tool manages.
pub const PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Products (
    ProductID   INTEGER PRIMARY KEY AUTOINCREMENT,
    ProductName TEXT    NOT NULL,
    CategoryID  INTEGER NOT NULL,
    UnitPrice   REAL    NOT NULL DEFAULT 0
)
"#;

/// Creates the `Products` table if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring Products table exists");

    sqlx::query(PRODUCTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Already ran once inside Database::new
        ensure_schema(db.pool()).await.unwrap();
        ensure_schema(db.pool()).await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'Products'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(tables, 1);
    }
}
