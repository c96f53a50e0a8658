//! # Admin Console
//!
//! The read-eval loop: print the menu, read a selection, run one data access
//! operation, print the outcome, repeat.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──► print MENU ──► read line ──► MenuOption::from_code               │
//! │   │                                     │                               │
//! │   │         ┌───────────────────────────┼───────────────────┐           │
//! │   │         ▼                           ▼                   ▼           │
//! │   │   1..5: prompts, parse,        0: "Goodbye!"      unknown code:     │
//! │   │   one ProductDao call,         return Ok(())      "Invalid choice"  │
//! │   │   print outcome                                         │           │
//! │   └─────────┴───────────────────────────────────────────────┘           │
//! │                                                                         │
//! │   A non-numeric id, category or price returns Err(InvalidInput)        │
//! │   and ends the session.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so tests can drive a session from a string.

use std::io::{BufRead, Write};

use northwind_core::validation::{parse_category_id, parse_product_id, parse_unit_price};
use northwind_core::{NewProduct, Product};
use northwind_db::ProductDao;
use tracing::debug;

use crate::error::CliError;
use crate::menu::{MenuOption, MENU};

/// An interactive admin session.
pub struct Console<R, W> {
    dao: ProductDao,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(dao: ProductDao, input: R, output: W) -> Self {
        Console { dao, input, output }
    }

    /// Runs until the user picks `0) Exit`.
    ///
    /// ## Returns
    /// * `Ok(())` - The user chose to exit
    /// * `Err(CliError)` - Unparseable input, closed input, or console I/O failure
    pub async fn run(&mut self) -> Result<(), CliError> {
        loop {
            let selection = self.prompt(MENU)?;

            let Some(option) = MenuOption::from_code(&selection) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            debug!(?option, "Menu selection");

            match option {
                MenuOption::ListAll => self.list_all().await?,
                MenuOption::Add => self.add().await?,
                MenuOption::Delete => self.delete().await?,
                MenuOption::Search => self.search().await?,
                MenuOption::Update => self.update().await?,
                MenuOption::Exit => {
                    writeln!(self.output, "Goodbye!")?;
                    self.output.flush()?;
                    return Ok(());
                }
            }
        }
    }

    /// Consumes the console and hands back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    // =========================================================================
    // Menu Operations
    // =========================================================================

    async fn list_all(&mut self) -> Result<(), CliError> {
        let products = self.dao.get_all().await;

        writeln!(self.output, "\nProducts:")?;
        self.print_products(&products)
    }

    async fn add(&mut self) -> Result<(), CliError> {
        let product_name = self.prompt("Enter product name: ")?;
        let category_id = parse_category_id(&self.prompt("Enter the product category id: ")?)?;
        let unit_price = parse_unit_price(&self.prompt("Enter product unit price: ")?)?;

        let product = NewProduct::new(product_name, category_id, unit_price);

        if self.dao.add(&product).await.is_some() {
            writeln!(self.output, "Product added successfully.")?;
        }
        Ok(())
    }

    async fn delete(&mut self) -> Result<(), CliError> {
        let product_id = parse_product_id(&self.prompt("Enter the product id: ")?)?;

        if self.dao.delete_by_id(product_id).await > 0 {
            writeln!(self.output, "Product deleted successfully.")?;
        } else {
            writeln!(self.output, "No product found with id {}.", product_id)?;
        }
        Ok(())
    }

    async fn search(&mut self) -> Result<(), CliError> {
        let product_id = parse_product_id(&self.prompt("Enter the product id: ")?)?;

        let products = self.dao.find_by_id(product_id).await;

        if products.is_empty() {
            writeln!(self.output, "\nProducts: ")?;
            writeln!(self.output, "No results.")?;
            return Ok(());
        }

        writeln!(self.output, "\nProducts:")?;
        self.print_products(&products)
    }

    async fn update(&mut self) -> Result<(), CliError> {
        let product_id = parse_product_id(&self.prompt("Enter product id: ")?)?;
        let product_name = self.prompt("Enter product name: ")?;
        let category_id = parse_category_id(&self.prompt("Enter the product category id: ")?)?;
        let unit_price = parse_unit_price(&self.prompt("Enter product unit price: ")?)?;

        let product = Product::new(product_id, product_name, category_id, unit_price);

        if self.dao.update(&product).await > 0 {
            writeln!(self.output, "Product updated successfully.")?;
        } else {
            writeln!(self.output, "No product found with id {}.", product_id)?;
        }
        Ok(())
    }

    // =========================================================================
    // Console I/O
    // =========================================================================

    fn print_products(&mut self, products: &[Product]) -> Result<(), CliError> {
        for product in products {
            writeln!(self.output, "{}", product)?;
        }
        Ok(())
    }

    /// Writes `text` without a newline and reads the answer.
    fn prompt(&mut self, text: &str) -> Result<String, CliError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line with its line terminator removed.
    fn read_line(&mut self) -> Result<String, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
