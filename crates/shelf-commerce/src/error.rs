//! Commerce error types.

use thiserror::Error;

/// Errors that can occur when bringing book data into the domain.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A wire price that cannot be represented in minor units.
    #[error("Invalid price for book {book_id}: {price}")]
    InvalidPrice { book_id: i64, price: f64 },
}
