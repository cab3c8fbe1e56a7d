//! Client configuration.
//!
//! The endpoint and scheduling username ship as placeholder strings. A value
//! that is empty or still equal to its placeholder means "not configured".

use std::path::PathBuf;

/// Placeholder for the intake endpoint URL.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_BACKEND_ENDPOINT_HERE";
/// Placeholder for the Calendly username.
pub const CALENDLY_PLACEHOLDER: &str = "YOUR_CALENDLY_USERNAME";
/// Default location of the local cache.
pub const DEFAULT_CACHE_FILE: &str = "leadflow-cache.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Intake endpoint, `None` when not configured.
    pub endpoint: Option<String>,
    /// Calendly username, `None` when not configured.
    pub calendly_username: Option<String>,
    pub cache_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: None,
            calendly_username: None,
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
        }
    }
}

impl ClientConfig {
    /// Builds a config from raw setting strings, resolving placeholders.
    pub fn new(endpoint: &str, calendly_username: &str, cache_path: impl Into<PathBuf>) -> Self {
        ClientConfig {
            endpoint: configured(endpoint, ENDPOINT_PLACEHOLDER),
            calendly_username: configured(calendly_username, CALENDLY_PLACEHOLDER),
            cache_path: cache_path.into(),
        }
    }
}

fn configured(value: &str, placeholder: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == placeholder {
        None
    } else {
        Some(value.to_string())
    }
}
