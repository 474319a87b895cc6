//! API server configuration from the environment.

use crate::ApiError;
use std::env;
use tracing::info;

/// Environment variable overriding the listening port.
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 4000;

/// Settings for the HTTP backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ApiConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to read variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ApiError::InvalidEnv {
                    key: PORT_ENV,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => {
                info!("{PORT_ENV} not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };
        Ok(Self { port })
    }

    /// Socket address to listen on.
    pub fn address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
