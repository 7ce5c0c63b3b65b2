//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Default TTL in minutes applied when a request omits `ttlMinutes`.
pub const DEFAULT_TTL_MINUTES: u64 = 60;

/// Minimum TTL in minutes a note may be stored for.
pub const MIN_TTL_MINUTES: u64 = 1;

/// Maximum TTL in minutes a note may be stored for (7 days).
pub const MAX_TTL_MINUTES: u64 = 60 * 24 * 7;

/// Server configuration parameters.
///
/// The store credentials are optional on purpose: a server without them still
/// starts and answers every request (except OPTIONS) with a 500 telling the
/// operator what to configure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external key-value store REST endpoint
    pub kv_rest_api_url: Option<String>,
    /// Bearer token for the external key-value store
    pub kv_rest_api_token: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// Timeout in seconds for outbound store calls
    pub store_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `KV_REST_API_URL` - Store endpoint URL (no default)
    /// - `KV_REST_API_TOKEN` - Store bearer token (no default)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STORE_TIMEOUT_SECS` - Outbound store call timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            kv_rest_api_url: env::var("KV_REST_API_URL")
                .ok()
                .filter(|v| !v.is_empty()),
            kv_rest_api_token: env::var("KV_REST_API_TOKEN")
                .ok()
                .filter(|v| !v.is_empty()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            store_timeout_secs: env::var("STORE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Returns true when both store credentials are present.
    pub fn store_configured(&self) -> bool {
        self.kv_rest_api_url.is_some() && self.kv_rest_api_token.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kv_rest_api_url: None,
            kv_rest_api_token: None,
            server_port: 3000,
            store_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.kv_rest_api_url.is_none());
        assert!(config.kv_rest_api_token.is_none());
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.store_timeout_secs, 10);
        assert!(!config.store_configured());
    }

    #[test]
    fn test_store_configured_requires_both_values() {
        let mut config = Config::default();
        config.kv_rest_api_url = Some("https://kv.example".to_string());
        assert!(!config.store_configured());

        config.kv_rest_api_token = Some("secret".to_string());
        assert!(config.store_configured());
    }

    #[test]
    fn test_ttl_bounds() {
        assert_eq!(MIN_TTL_MINUTES, 1);
        assert_eq!(MAX_TTL_MINUTES, 10080);
    }
}
