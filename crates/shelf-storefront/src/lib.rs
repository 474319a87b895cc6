//! Storefront for the Shelf bookstore.
//!
//! Loads the catalog from the store's backend and a third-party catalog,
//! then holds the page state: filters, cart, mock session and the
//! book-detail view.
//!
//! # Example
//!
//! ```rust,ignore
//! use shelf_storefront::{Storefront, StorefrontConfig};
//!
//! let config = StorefrontConfig::default();
//! let (mut store, report) = Storefront::load(&config.aggregator()).await;
//! store.set_search("code");
//! for book in store.visible_books() {
//!     println!("{} {}", book.title, book.price);
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod source;
pub mod storefront;

pub use aggregate::{AggregateReport, Aggregator, PrimaryOrigin};
pub use config::StorefrontConfig;
pub use error::SourceError;
pub use source::{BackendSource, BookSource, ExternalSource, RemapOptions, StaticSource};
pub use storefront::Storefront;
