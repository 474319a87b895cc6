//! Book catalog module.
//!
//! Contains the book type, the `/books` wire record, the aggregated catalog
//! and category option derivation.

mod book;
mod category;
mod record;

pub use book::{Book, BookBuilder, Catalog};
pub use category::category_options;
pub use record::{BookRecord, BooksPayload};
