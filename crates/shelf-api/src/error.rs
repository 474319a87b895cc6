//! API server errors.

use thiserror::Error;

/// Errors that stop the API server from starting or running.
#[derive(Error, Debug)]
pub enum ApiError {
    /// An environment variable held an unusable value.
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidEnv {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// Could not bind the listening socket.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    /// Failed to encode a response body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
