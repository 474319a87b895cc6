//! Storefront configuration.

use crate::aggregate::Aggregator;
use crate::source::{
    BackendSource, ExternalSource, RemapOptions, DEFAULT_EXCHANGE_RATE, DEFAULT_ID_BASE,
    DEFAULT_LIMIT,
};
use serde::{Deserialize, Serialize};
use shelf_data::FetchClient;
use std::time::Duration;

/// Where the storefront loads books from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the store's own backend (`{api_base}/books`).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Full URL of the third-party catalog.
    #[serde(default = "default_external_url")]
    pub external_url: String,

    /// Multiplier from the third-party price to rupees.
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,

    /// Maximum number of third-party books.
    #[serde(default = "default_external_limit")]
    pub external_limit: usize,

    /// First id of the third-party id range.
    #[serde(default = "default_external_id_base")]
    pub external_id_base: i64,

    /// Per-request timeout in seconds. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base() -> String {
    "http://localhost:4000".to_string()
}

fn default_external_url() -> String {
    "https://api.itbook.store/1.0/new".to_string()
}

fn default_exchange_rate() -> f64 {
    DEFAULT_EXCHANGE_RATE
}

fn default_external_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_external_id_base() -> i64 {
    DEFAULT_ID_BASE
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            external_url: default_external_url(),
            exchange_rate: default_exchange_rate(),
            external_limit: default_external_limit(),
            external_id_base: default_external_id_base(),
            request_timeout_secs: None,
        }
    }
}

impl StorefrontConfig {
    /// Remap options for the external source.
    pub fn remap_options(&self) -> RemapOptions {
        RemapOptions {
            id_base: self.external_id_base,
            limit: self.external_limit,
            exchange_rate: self.exchange_rate,
        }
    }

    /// HTTP client shared by both sources.
    pub fn fetch_client(&self) -> FetchClient {
        let client = FetchClient::new();
        match self.request_timeout_secs {
            Some(secs) => client.with_timeout(Duration::from_secs(secs)),
            None => client,
        }
    }

    /// Build an aggregator wired to the configured sources.
    pub fn aggregator(&self) -> Aggregator {
        let client = self.fetch_client();
        Aggregator::new(
            BackendSource::new(client.clone(), self.api_base.clone()),
            ExternalSource::new(client, self.external_url.clone())
                .with_options(self.remap_options()),
        )
    }
}
