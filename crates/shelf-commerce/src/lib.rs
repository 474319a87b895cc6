//! Bookstore domain types and logic for Shelf.
//!
//! - **Catalog**: books, the wire record served by `/books`, category options
//! - **Search**: title/category filtering over a catalog
//! - **Cart**: per-book quantities and totals in minor currency units
//!
//! # Example
//!
//! ```rust
//! use shelf_commerce::prelude::*;
//!
//! let book = Book::builder(BookId::new(1), "Clean Code")
//!     .author("Robert C Martin")
//!     .category("Programming")
//!     .price(Money::new(3799, Currency::INR))
//!     .build();
//!
//! let mut cart = Cart::new();
//! cart.add(&book);
//! cart.add(&book);
//! assert_eq!(cart.total().minor_units, 7598);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use cart::{Cart, CartLine};
pub use catalog::{Book, Catalog};
pub use error::CommerceError;
pub use ids::BookId;
pub use money::{Currency, Money};
pub use search::{CatalogFilter, ALL_CATEGORIES};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::BookId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{category_options, Book, BookBuilder, BookRecord, BooksPayload, Catalog};

    // Cart
    pub use crate::cart::{Cart, CartLine};

    // Search
    pub use crate::search::{CatalogFilter, ALL_CATEGORIES};
}
