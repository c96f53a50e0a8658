//! # Product Data Access Object
//!
//! The data access boundary the console talks to.
//!
//! ## Failure Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storage Failures Stop Here                           │
//! │                                                                         │
//! │  ProductRepository ──► Err(DbError)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductDao: error!(...) ──► stdout                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Safe default:                                                          │
//! │    add          → None                                                  │
//! │    get_all      → []                                                    │
//! │    find_by_id   → []                                                    │
//! │    delete_by_id → 0                                                     │
//! │    update       → 0                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A caller cannot tell "no rows" from "query failed" through this type.
//! Use [`ProductRepository`] directly when that distinction matters.

use tracing::error;

use crate::repository::product::ProductRepository;
use northwind_core::{NewProduct, Product};

/// Product operations that never return an error.
#[derive(Debug, Clone)]
pub struct ProductDao {
    repo: ProductRepository,
}

impl ProductDao {
    pub fn new(repo: ProductRepository) -> Self {
        ProductDao { repo }
    }

    /// Inserts a product and returns the id storage assigned, or `None` if
    /// the insert failed.
    pub async fn add(&self, product: &NewProduct) -> Option<i64> {
        match self.repo.insert(product).await {
            Ok(product_id) => Some(product_id),
            Err(e) => {
                error!(error = %e, "Unable to add product to the database");
                None
            }
        }
    }

    /// Returns every product; empty when the table is empty or unreachable.
    pub async fn get_all(&self) -> Vec<Product> {
        self.repo.list_all().await.unwrap_or_else(|e| {
            error!(error = %e, "Unable to retrieve products list from the database");
            Vec::new()
        })
    }

    /// Returns the matching product as a zero-or-one element list.
    pub async fn find_by_id(&self, product_id: i64) -> Vec<Product> {
        match self.repo.get_by_id(product_id).await {
            Ok(found) => found.into_iter().collect(),
            Err(e) => {
                error!(product_id, error = %e, "Unable to retrieve product from the database");
                Vec::new()
            }
        }
    }

    /// Deletes by primary key; returns rows removed.
    pub async fn delete_by_id(&self, product_id: i64) -> u64 {
        self.repo.delete(product_id).await.unwrap_or_else(|e| {
            error!(product_id, error = %e, "Unable to remove product from the database");
            0
        })
    }

    /// Overwrites name, category and price; returns rows changed.
    pub async fn update(&self, product: &Product) -> u64 {
        self.repo.update(product).await.unwrap_or_else(|e| {
            error!(product_id = product.product_id, error = %e, "Unable to update product");
            0
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use northwind_core::Money;

    async fn dao() -> (Database, ProductDao) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let dao = db.product_dao();
        (db, dao)
    }

    #[tokio::test]
    async fn test_add_chai_appears_in_get_all() {
        let (_db, dao) = dao().await;
        let before = dao.get_all().await;

        let chai = NewProduct::new("Chai", 1, Money::from_cents(1800));
        let id = dao.add(&chai).await.unwrap();

        let after = dao.get_all().await;
        assert_eq!(after.len(), before.len() + 1);

        let added: Vec<&Product> = after
            .iter()
            .filter(|p| !before.contains(p))
            .collect();
        assert_eq!(added, vec![&chai.with_id(id)]);
    }

    #[tokio::test]
    async fn test_add_then_find_round_trips() {
        let (_db, dao) = dao().await;
        let chang = NewProduct::new("Chang", 1, Money::from_cents(1900));

        let id = dao.add(&chang).await.unwrap();
        let found = dao.find_by_id(id).await;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].product_name, chang.product_name);
        assert_eq!(found[0].category_id, chang.category_id);
        assert_eq!(found[0].unit_price, chang.unit_price);
    }

    #[tokio::test]
    async fn test_find_unmatched_is_empty() {
        let (_db, dao) = dao().await;

        assert!(dao.find_by_id(9999).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_last_write_wins() {
        let (_db, dao) = dao().await;
        let id = dao
            .add(&NewProduct::new("Aniseed Syrup", 2, Money::from_cents(1000)))
            .await
            .unwrap();

        let first = Product::new(id, "Aniseed Syrup 500ml", 2, Money::from_cents(1200));
        let second = Product::new(id, "Aniseed Syrup 1L", 3, Money::from_cents(2100));
        assert_eq!(dao.update(&first).await, 1);
        assert_eq!(dao.update(&second).await, 1);

        assert_eq!(dao.find_by_id(id).await, vec![second]);
    }

    #[tokio::test]
    async fn test_delete_then_find_is_empty() {
        let (_db, dao) = dao().await;
        let id = dao
            .add(&NewProduct::new("Ikura", 8, Money::from_cents(3100)))
            .await
            .unwrap();
        let before = dao.get_all().await.len();

        assert_eq!(dao.delete_by_id(id).await, 1);

        assert!(dao.find_by_id(id).await.is_empty());
        assert_eq!(dao.get_all().await.len(), before - 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let (_db, dao) = dao().await;
        dao.add(&NewProduct::new("Konbu", 8, Money::from_cents(600)))
            .await
            .unwrap();

        assert_eq!(dao.delete_by_id(9999).await, 0);
        assert_eq!(dao.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure_returns_safe_defaults() {
        let (db, dao) = dao().await;
        db.close().await;

        let tofu = NewProduct::new("Tofu", 7, Money::from_cents(2325));
        assert_eq!(dao.add(&tofu).await, None);
        assert!(dao.get_all().await.is_empty());
        assert!(dao.find_by_id(1).await.is_empty());
        assert_eq!(dao.delete_by_id(1).await, 0);
        assert_eq!(dao.update(&tofu.with_id(1)).await, 0);
    }
}
