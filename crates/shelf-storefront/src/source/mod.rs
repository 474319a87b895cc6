//! Book sources feeding the aggregator.
//!
//! - [`BackendSource`]: the store's own `/books` endpoint
//! - [`ExternalSource`]: a third-party catalog remapped into [`Book`]s
//! - [`builtin_books`]: the fixed list used when the backend is unavailable

mod backend;
mod builtin;
mod external;

pub use backend::{BackendSource, BOOKS_PATH};
pub use builtin::builtin_books;
pub use external::{
    parse_price, remap_external, ExternalSource, RemapOptions, DEFAULT_EXCHANGE_RATE,
    DEFAULT_ID_BASE, DEFAULT_LIMIT, EXTERNAL_CATEGORY,
};

use crate::SourceError;
use async_trait::async_trait;
use shelf_commerce::Book;

/// Something that can produce a list of books once.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetch the source's books in display order.
    async fn fetch(&self) -> Result<Vec<Book>, SourceError>;
}

/// A source that always yields the same books.
///
/// Useful for wiring the built-in list, or a fixed catalog in tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    books: Vec<Book>,
}

impl StaticSource {
    /// Create a static source.
    pub fn new(name: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            books,
        }
    }
}

#[async_trait]
impl BookSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<Book>, SourceError> {
        Ok(self.books.clone())
    }
}
