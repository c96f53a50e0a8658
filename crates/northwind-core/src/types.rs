//! # Domain Types
//!
//! The one entity this tool manages.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Lifecycle                               │
//! │                                                                         │
//! │  Console input ──► NewProduct ──► add ──► Products row                 │
//! │                    (no id)              (ProductID assigned)           │
//! │                                              │                          │
//! │                         get_all / find_by_id ▼                          │
//! │                                          Product                        │
//! │                                              │                          │
//! │                      update (same id) ◄──────┤                          │
//! │                      delete_by_id     ◄──────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `product_id` is assigned by storage and never changes afterwards. Name,
//! category and price are overwritten freely by update.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// New Product
// =============================================================================

/// A product that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Display name.
    pub product_name: String,

    /// Category reference (`Categories.CategoryID` in the full Northwind schema).
    pub category_id: i64,

    /// Price per unit.
    pub unit_price: Money,
}

impl NewProduct {
    pub fn new(product_name: impl Into<String>, category_id: i64, unit_price: Money) -> Self {
        NewProduct {
            product_name: product_name.into(),
            category_id,
            unit_price,
        }
    }

    /// Attaches the id storage assigned to this product.
    pub fn with_id(self, product_id: i64) -> Product {
        Product {
            product_id,
            product_name: self.product_name,
            category_id: self.category_id,
            unit_price: self.unit_price,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A stored catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier assigned by storage.
    pub product_id: i64,

    pub product_name: String,

    pub category_id: i64,

    pub unit_price: Money,
}

impl Product {
    pub fn new(
        product_id: i64,
        product_name: impl Into<String>,
        category_id: i64,
        unit_price: Money,
    ) -> Self {
        Product {
            product_id,
            product_name: product_name.into(),
            category_id,
            unit_price,
        }
    }
}

/// One console line per product: `#1 Chai (category 1) $18.00`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} (category {}) {}",
            self.product_id, self.product_name, self.category_id, self.unit_price
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
