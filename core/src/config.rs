//! Base endpoint configuration.

use std::env;

/// Address of the catalog server when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable that overrides [`DEFAULT_BASE_URL`]. Only the
/// `catalog-view` binary reads it; library callers pass a base URL.
pub const BASE_URL_ENV: &str = "CATALOG_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
