//! Book source errors.

use shelf_data::FetchError;
use thiserror::Error;

/// Why a book source produced no books.
///
/// These never reach the user: the aggregator replaces a failed source with
/// its fallback value.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Network failure or non-2xx response.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The response decoded but held no books.
    #[error("source returned no books")]
    Empty,
}
