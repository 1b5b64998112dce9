//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::fmt;

use crate::error::{ProxyError, Result};

/// Default Trefle API base URL.
pub const DEFAULT_BASE_URL: &str = "https://trefle.io/api/v1";

/// Proxy configuration parameters.
///
/// Everything except the API token has a sensible default.
#[derive(Clone)]
pub struct Config {
    /// Secret Trefle API token injected into every upstream request
    pub api_token: String,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream Trefle API
    pub upstream_base_url: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a Config with the given token and default values for the rest.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            server_port: 5000,
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
            upstream_timeout: 30,
        }
    }

    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TREFLE_API_TOKEN` - Trefle API token (required)
    /// - `PORT` - HTTP server port (default: 5000)
    /// - `TREFLE_BASE_URL` - Upstream base URL (default: https://trefle.io/api/v1)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    ///
    /// # Errors
    /// Returns `ProxyError::Config` if `TREFLE_API_TOKEN` is unset or empty.
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("TREFLE_API_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                ProxyError::Config("Missing TREFLE_API_TOKEN in environment variables".to_string())
            })?;

        let defaults = Self::new(api_token);

        Ok(Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            upstream_base_url: env::var("TREFLE_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| defaults.upstream_base_url.clone()),
            upstream_timeout: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.upstream_timeout),
            ..defaults
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("server_port", &self.server_port)
            .field("upstream_base_url", &self.upstream_base_url)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("TREFLE_API_TOKEN");
        env::remove_var("PORT");
        env::remove_var("TREFLE_BASE_URL");
        env::remove_var("UPSTREAM_TIMEOUT_SECS");
    }

    #[test]
    fn test_config_new_defaults() {
        let config = Config::new("secret");
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.upstream_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.upstream_timeout, 30);
    }

    #[test]
    #[serial]
    fn test_config_from_env_requires_token() {
        clear_env();

        let result = Config::from_env();
        assert!(matches!(result, Err(ProxyError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_config_from_env_rejects_blank_token() {
        clear_env();
        env::set_var("TREFLE_API_TOKEN", "   ");

        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        clear_env();
        env::set_var("TREFLE_API_TOKEN", "secret");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.upstream_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.upstream_timeout, 30);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        clear_env();
        env::set_var("TREFLE_API_TOKEN", "secret");
        env::set_var("PORT", "8080");
        env::set_var("TREFLE_BASE_URL", "http://localhost:9999/api/v1");
        env::set_var("UPSTREAM_TIMEOUT_SECS", "not-a-number");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.upstream_base_url, "http://localhost:9999/api/v1");
        // Invalid values fall back to the default
        assert_eq!(config.upstream_timeout, 30);
        clear_env();
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = Config::new("super-secret-token");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
