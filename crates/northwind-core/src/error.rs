//! # Error Types
//!
//! Errors raised while turning console input into typed product fields.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  northwind-core errors (this file)                                     │
//! │  └── ValidationError  - Input parse failures                           │
//! │                                                                         │
//! │  northwind-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── CliError         - Fatal errors that end the menu loop            │
//! │                                                                         │
//! │  Flow: ValidationError ──► CliError ──► process exit                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input parse errors.
///
/// The console does not recover from these: a non-numeric id or price ends
/// the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input was not a whole number.
    #[error("Invalid {field}: '{input}' is not a whole number")]
    NotAnInteger { field: String, input: String },

    /// The input was not a decimal number.
    #[error("Invalid {field}: '{input}' is not a number")]
    NotANumber { field: String, input: String },
}

impl ValidationError {
    pub fn not_an_integer(field: impl Into<String>, input: impl Into<String>) -> Self {
        ValidationError::NotAnInteger {
            field: field.into(),
            input: input.into(),
        }
    }

    pub fn not_a_number(field: impl Into<String>, input: impl Into<String>) -> Self {
        ValidationError::NotANumber {
            field: field.into(),
            input: input.into(),
        }
    }
}
