//! Catalog search module.
//!
//! Contains the title/category filter used to derive the visible books.

mod filter;

pub use filter::{CatalogFilter, ALL_CATEGORIES};
