//! Fully-read responses from a book source.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// Longest body excerpt kept in an HTTP error message.
const ERROR_BODY_LIMIT: usize = 200;

/// A response whose body has already been read.
#[derive(Debug, Clone)]
pub struct Response {
    /// URL the request went to.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Raw body.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(url: impl Into<String>, status: u16, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            status,
            body,
        }
    }

    /// True for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Pass 2xx responses through and turn anything else into
    /// [`FetchError::HttpError`] naming the URL and the start of the body.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }

        let body = String::from_utf8_lossy(&self.body);
        let excerpt: String = body.trim().chars().take(ERROR_BODY_LIMIT).collect();
        let message = if excerpt.is_empty() {
            format!("GET {}", self.url)
        } else {
            format!("GET {}: {}", self.url, excerpt)
        };
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }
}
