//! # Seed Data Loader
//!
//! Populates an empty Products table for development.
//!
//! ## Usage
//! ```bash
//! # Load the classic Northwind sample products
//! cargo run -p northwind-db --bin seed
//!
//! # Specify database path
//! cargo run -p northwind-db --bin seed -- --db ./data/northwind.db
//!
//! # Load products from a JSON array of
//! # {"product_name": "...", "category_id": 1, "unit_price": 18.0}
//! cargo run -p northwind-db --bin seed -- --file catalog.json
//! ```

use std::env;
use std::fs;

use northwind_core::{Money, NewProduct};
use northwind_db::{Database, DbConfig};

/// Classic Northwind products: (name, category id, unit price in cents).
const NORTHWIND_PRODUCTS: &[(&str, i64, i64)] = &[
    ("Chai", 1, 1800),
    ("Chang", 1, 1900),
    ("Aniseed Syrup", 2, 1000),
    ("Chef Anton's Cajun Seasoning", 2, 2200),
    ("Chef Anton's Gumbo Mix", 2, 2135),
    ("Grandma's Boysenberry Spread", 2, 2500),
    ("Uncle Bob's Organic Dried Pears", 7, 3000),
    ("Northwoods Cranberry Sauce", 2, 4000),
    ("Mishi Kobe Niku", 6, 9700),
    ("Ikura", 8, 3100),
    ("Queso Cabrales", 4, 2100),
    ("Queso Manchego La Pastora", 4, 3800),
    ("Konbu", 8, 600),
    ("Tofu", 7, 2325),
    ("Genen Shouyu", 2, 1550),
    ("Pavlova", 3, 1745),
    ("Alice Mutton", 6, 3900),
    ("Carnarvon Tigers", 8, 6250),
    ("Teatime Chocolate Biscuits", 3, 920),
    ("Sir Rodney's Marmalade", 3, 8100),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./northwind.db");
    let mut catalog_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    catalog_file = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Northwind Seed Data Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>     Database file path (default: ./northwind.db)");
                println!("  -f, --file <PATH>   JSON catalog to load instead of the sample products");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let catalog = match &catalog_file {
        Some(path) => load_catalog(path)?,
        None => sample_catalog(),
    };

    println!("Northwind Seed Data Loader");
    println!("==========================");
    println!("Database: {}", db_path);
    println!("Products: {}", catalog.len());
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let repo = db.products();
    let existing = repo.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let mut inserted = 0;
    for product in &catalog {
        match repo.insert(product).await {
            Ok(_) => inserted += 1,
            Err(e) => eprintln!("Failed to insert {}: {}", product.product_name, e),
        }
    }

    println!("✓ Inserted {} of {} products", inserted, catalog.len());

    db.close().await;
    Ok(())
}

/// Builds the built-in sample catalog.
fn sample_catalog() -> Vec<NewProduct> {
    NORTHWIND_PRODUCTS
        .iter()
        .map(|(name, category_id, cents)| {
            NewProduct::new(*name, *category_id, Money::from_cents(*cents))
        })
        .collect()
}

/// Reads a JSON array of products from disk.
fn load_catalog(path: &str) -> Result<Vec<NewProduct>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let products: Vec<NewProduct> = serde_json::from_str(&raw)?;
    Ok(products)
}
