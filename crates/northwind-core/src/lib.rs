//! # northwind-core: Product Catalog Types
//!
//! Pure types for the Northwind product administration tool. Nothing in this
//! crate touches the database or the console.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Northwind Admin Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/admin-cli)                     │   │
//! │  │      menu ──► prompts ──► parse input ──► print outcome         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ northwind-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                   │   │
//! │  │   │   types   │  │   money   │  │ validation│                   │   │
//! │  │   │  Product  │  │   Money   │  │  parse_*  │                   │   │
//! │  │   │NewProduct │  │           │  │           │                   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 northwind-db (Database Layer)                   │   │
//! │  │              Pool, repository, ProductDao                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product` and `NewProduct`
//! - [`money`] - Money type with integer cents
//! - [`error`] - Input parse errors
//! - [`validation`] - Parsing console input into typed fields
//!
//! ## Example Usage
//!
//! ```rust
//! use northwind_core::{Money, NewProduct};
//!
//! let chai = NewProduct::new("Chai", 1, Money::from_cents(1800));
//! assert_eq!(chai.unit_price.to_string(), "$18.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;
