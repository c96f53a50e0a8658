//! # Product Repository
//!
//! Parameterized SQL for the `Products` table.
//!
//! ## Statements
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Statement Per Operation                          │
//! │                                                                         │
//! │  insert     INSERT INTO Products(ProductName, CategoryID, UnitPrice)   │
//! │             VALUES (?1, ?2, ?3)                 → last_insert_rowid     │
//! │                                                                         │
//! │  list_all   SELECT ... FROM Products             → Vec<Product>         │
//! │                                                                         │
//! │  get_by_id  SELECT ... WHERE ProductID = ?1      → Option<Product>      │
//! │                                                                         │
//! │  update     UPDATE Products SET ProductName = ?1, CategoryID = ?2,     │
//! │             UnitPrice = ?3 WHERE ProductID = ?4  → rows affected        │
//! │                                                                         │
//! │  delete     DELETE FROM Products WHERE ProductID = ?1 → rows affected   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method hands `&self.pool` to sqlx as the executor: a connection is
//! checked out for the one statement and returned to the pool when the
//! future resolves, whether it succeeded or not.
//!
//! A missing id is not an error here. `get_by_id` answers `None`, and
//! `update`/`delete` report `0` rows.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use northwind_core::{Money, NewProduct, Product};

/// Column list shared by the SELECT statements.
///
/// `UnitPrice` is cast so NUMERIC-affinity tables decode as a float too.
const PRODUCT_COLUMNS: &str = r#"
    ProductID AS product_id,
    ProductName AS product_name,
    CategoryID AS category_id,
    COALESCE(CAST(UnitPrice AS REAL), 0.0) AS unit_price
"#;

/// Raw row as SQLite returns it.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    product_id: i64,
    product_name: String,
    category_id: i64,
    unit_price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_id: row.product_id,
            product_name: row.product_name,
            category_id: row.category_id,
            unit_price: Money::from_decimal(row.unit_price),
        }
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.insert(&NewProduct::new("Chai", 1, Money::from_cents(1800))).await?;
/// let chai = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(i64)` - The `ProductID` storage assigned
    /// * `Err(DbError)` - Connectivity or constraint failure
    pub async fn insert(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(name = %product.product_name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO Products (ProductName, CategoryID, UnitPrice)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&product.product_name)
        .bind(product.category_id)
        .bind(product.unit_price.to_decimal())
        .execute(&self.pool)
        .await?;

        let product_id = result.last_insert_rowid();
        debug!(product_id, "Product inserted");
        Ok(product_id)
    }

    /// Lists every product in storage order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM Products");

        let rows: Vec<ProductRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        debug!(count = rows.len(), "Listed products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, product_id: i64) -> DbResult<Option<Product>> {
        debug!(product_id, "Fetching product");

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM Products WHERE ProductID = ?1");

        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    /// Overwrites name, category and price of an existing product.
    ///
    /// ## Returns
    /// Number of rows changed: `1`, or `0` when the id doesn't exist.
    pub async fn update(&self, product: &Product) -> DbResult<u64> {
        debug!(product_id = product.product_id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE Products SET
                ProductName = ?1,
                CategoryID = ?2,
                UnitPrice = ?3
            WHERE ProductID = ?4
            "#,
        )
        .bind(&product.product_name)
        .bind(product.category_id)
        .bind(product.unit_price.to_decimal())
        .bind(product.product_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a product by primary key.
    ///
    /// ## Returns
    /// Number of rows removed: `1`, or `0` when the id doesn't exist.
    pub async fn delete(&self, product_id: i64) -> DbResult<u64> {
        debug!(product_id, "Deleting product");

        let result = sqlx::query("DELETE FROM Products WHERE ProductID = ?1")
            .bind(product_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts total products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> (Database, ProductRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();
        (db, repo)
    }

    fn chai() -> NewProduct {
        NewProduct::new("Chai", 1, Money::from_cents(1800))
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trips() {
        let (_db, repo) = repo().await;

        let id = repo.insert(&chai()).await.unwrap();
        let stored = repo.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(stored, chai().with_id(id));
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let (_db, repo) = repo().await;

        let first = repo.insert(&chai()).await.unwrap();
        let second = repo
            .insert(&NewProduct::new("Chang", 1, Money::from_cents(1900)))
            .await
            .unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_list_all() {
        let (_db, repo) = repo().await;
        assert!(repo.list_all().await.unwrap().is_empty());

        repo.insert(&chai()).await.unwrap();
        repo.insert(&NewProduct::new("Chang", 1, Money::from_cents(1900)))
            .await
            .unwrap();

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.product_name)
            .collect();
        assert_eq!(names, vec!["Chai", "Chang"]);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let (_db, repo) = repo().await;

        assert_eq!(repo.get_by_id(9999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let (_db, repo) = repo().await;
        let id = repo.insert(&chai()).await.unwrap();

        let changed = Product::new(id, "Chai Tea", 2, Money::from_cents(2050));
        assert_eq!(repo.update(&changed).await.unwrap(), 1);

        assert_eq!(repo.get_by_id(id).await.unwrap(), Some(changed));
    }

    #[tokio::test]
    async fn test_update_missing_changes_nothing() {
        let (_db, repo) = repo().await;
        let id = repo.insert(&chai()).await.unwrap();

        let ghost = Product::new(id + 100, "Ghost", 9, Money::from_cents(1));
        assert_eq!(repo.update(&ghost).await.unwrap(), 0);

        assert_eq!(repo.list_all().await.unwrap(), vec![chai().with_id(id)]);
    }

    #[tokio::test]
    async fn test_delete() {
        let (_db, repo) = repo().await;
        let id = repo.insert(&chai()).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.get_by_id(id).await.unwrap(), None);

        // Second delete is a no-op
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_numeric_affinity_price_decodes() {
        let db = Database::new(DbConfig::in_memory().without_schema())
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE Products (
                ProductID INTEGER PRIMARY KEY AUTOINCREMENT,
                ProductName TEXT NOT NULL,
                CategoryID INTEGER,
                UnitPrice NUMERIC
            )",
        )
        .execute(db.pool())
        .await
        .unwrap();

        let repo = db.products();
        let id = repo.insert(&chai()).await.unwrap();

        // NUMERIC affinity stores 18.0 as the integer 18
        let stored_type: String =
            sqlx::query_scalar("SELECT typeof(UnitPrice) FROM Products WHERE ProductID = ?1")
                .bind(id)
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(stored_type, "integer");

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.unit_price, Money::from_cents(1800));
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_error() {
        let (db, repo) = repo().await;
        db.close().await;

        let err = repo.list_all().await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }
}
