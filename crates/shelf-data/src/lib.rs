//! HTTP client utilities for Shelf.
//!
//! A small async wrapper over `reqwest` with a base URL and an optional
//! per-request timeout. Every request asks for JSON and responses are read
//! fully into memory.
//!
//! # Example
//!
//! ```rust,ignore
//! use shelf_data::FetchClient;
//! use shelf_commerce::catalog::BooksPayload;
//!
//! let client = FetchClient::new().with_base_url("http://localhost:4000");
//! let payload: BooksPayload = client
//!     .get("/books")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod response;

pub use error::FetchError;
pub use response::Response;

use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;

/// HTTP client for outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            timeout: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative
    /// request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Give up on requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve `url` against the base URL.
    pub fn resolve(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url.to_string(),
        }
    }

    /// Create a GET request.
    pub fn get(&self, url: impl AsRef<str>) -> RequestBuilder {
        RequestBuilder {
            http: self.http.clone(),
            url: self.resolve(url.as_ref()),
            timeout: self.timeout,
        }
    }
}

/// A GET request being built.
#[derive(Debug)]
pub struct RequestBuilder {
    http: reqwest::Client,
    url: String,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    /// The resolved request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the request and read the whole response.
    ///
    /// Non-2xx statuses are returned as a normal [`Response`]; use
    /// [`Response::error_for_status`] to turn them into errors.
    pub async fn send(self) -> Result<Response, FetchError> {
        let mut request = self.http.get(&self.url).header(ACCEPT, "application/json");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(url = %self.url, status, bytes = body.len(), "Fetched");
        Ok(Response::new(self.url, status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, RequestBuilder, Response};
}
