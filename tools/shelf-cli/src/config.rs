//! CLI configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shelf_storefront::StorefrontConfig;

/// File names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["shelf.toml", ".shelf.toml", "shelf.json"];

/// CLI configuration loaded from shelf.toml or shelf.json.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the storefront loads books from.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// API server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// API server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listening port. Falls back to `PORT`, then 4000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl CliConfig {
    /// Load configuration from a file, picking the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration text.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            serde_json::from_str(content).context("Invalid JSON config")
        } else {
            toml::from_str(content).context("Invalid TOML config")
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Default shelf.toml contents.
pub fn generate_default_config() -> String {
    let defaults = StorefrontConfig::default();
    format!(
        r#"# Shelf configuration

[storefront]
api_base = "{api_base}"
external_url = "{external_url}"
exchange_rate = {exchange_rate:.1}
external_limit = {external_limit}
external_id_base = {external_id_base}
# request_timeout_secs = 10

[server]
# port = 4000
"#,
        api_base = defaults.api_base,
        external_url = defaults.external_url,
        exchange_rate = defaults.exchange_rate,
        external_limit = defaults.external_limit,
        external_id_base = defaults.external_id_base,
    )
}
