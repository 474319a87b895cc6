//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// One or more required form fields were empty.
    #[error("Please fill all required fields (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Unknown auth mode name.
    #[error("unknown auth mode: {0}")]
    UnknownMode(String),
}
