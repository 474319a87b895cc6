//! The store's own `/books` backend.

use crate::source::BookSource;
use crate::SourceError;
use async_trait::async_trait;
use serde_json::Value;
use shelf_commerce::catalog::BookRecord;
use shelf_commerce::{Book, Currency};
use shelf_data::FetchClient;
use tracing::warn;

/// Path of the books endpoint.
pub const BOOKS_PATH: &str = "/books";

/// Fetches `GET {base}/books` and converts the records into books.
#[derive(Debug, Clone)]
pub struct BackendSource {
    client: FetchClient,
    currency: Currency,
}

impl BackendSource {
    /// Create a source reading from `base_url`.
    pub fn new(client: FetchClient, base_url: impl Into<String>) -> Self {
        Self {
            client: client.with_base_url(base_url),
            currency: Currency::INR,
        }
    }

    /// Convert a decoded `{"books": [...]}` body into books.
    ///
    /// Each record is decoded on its own, so a malformed record or one with
    /// an unusable price is dropped without affecting the rest. An empty
    /// result counts as a failure so the caller falls back to the built-in
    /// list.
    pub fn books_from_body(body: Value, currency: Currency) -> Result<Vec<Book>, SourceError> {
        let records = match body {
            Value::Object(mut map) => match map.remove("books") {
                Some(Value::Array(records)) => records,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        let books: Vec<Book> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let record: BookRecord = match serde_json::from_value(raw) {
                    Ok(record) => record,
                    Err(e) => {
                        warn!(index, error = %e, "Skipping malformed backend book");
                        return None;
                    }
                };
                match record.into_book(currency) {
                    Ok(book) => Some(book),
                    Err(e) => {
                        warn!(index, error = %e, "Skipping backend book");
                        None
                    }
                }
            })
            .collect();

        if books.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(books)
    }
}

#[async_trait]
impl BookSource for BackendSource {
    fn name(&self) -> &str {
        "backend"
    }

    async fn fetch(&self) -> Result<Vec<Book>, SourceError> {
        let body: Value = self
            .client
            .get(BOOKS_PATH)
            .send()
            .await?
            .error_for_status()?
            .json()?;

        Self::books_from_body(body, self.currency)
    }
}
