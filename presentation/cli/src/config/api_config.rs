use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:9000/api";

/// Storefront API connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_API_URL: API root (default: "http://localhost:9000/api")
    /// - STOREFRONT_HTTP_TIMEOUT_SECS: request timeout in seconds (default: client default)
    pub fn from_env() -> Self {
        let base_url =
            env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout = env::var("STOREFRONT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| parse_timeout(&raw));

        Self { base_url, timeout }
    }
}

/// Whole seconds, ignoring blanks and zero.
fn parse_timeout(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
