//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Catalog and search configuration.
    pub catalog: CatalogConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Feedback relay configuration.
    pub feedback: FeedbackConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the catalog domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Cap on the number of search results returned per query.
    pub search_limit: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the feedback relay.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// HTTP endpoint of the external mail relay. When unset, feedback is
    /// only logged locally.
    pub endpoint: Option<String>,

    /// Bearer token for the relay, if it requires one.
    pub api_key: Option<String>,
}

/// Custom Debug implementation to redact the relay token from logs.
impl std::fmt::Debug for FeedbackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "text-tools-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            catalog: CatalogConfig {
                search_limit: crate::domains::catalog::SearchEngine::DEFAULT_LIMIT,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            feedback: FeedbackConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_SEARCH_LIMIT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(limit) = std::env::var("MCP_SEARCH_LIMIT") {
            if let Ok(limit) = limit.parse::<usize>() {
                config.catalog.search_limit = limit.max(1);
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Feedback relay endpoint and credentials
        if let Ok(endpoint) = std::env::var("MCP_FEEDBACK_ENDPOINT") {
            config.feedback.endpoint = Some(endpoint);
            info!("Feedback relay endpoint loaded from environment");
        }
        if let Ok(api_key) = std::env::var("MCP_FEEDBACK_API_KEY") {
            config.feedback.api_key = Some(api_key);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog.search_limit, 8);
        assert_eq!(config.logging.level, "info");
        assert!(config.feedback.endpoint.is_none());
    }

    #[test]
    fn test_search_limit_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SEARCH_LIMIT", "3");
        }
        let config = Config::from_env();
        assert_eq!(config.catalog.search_limit, 3);
        unsafe {
            std::env::remove_var("MCP_SEARCH_LIMIT");
        }
    }

    #[test]
    fn test_bad_search_limit_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SEARCH_LIMIT", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.catalog.search_limit, 8);
        unsafe {
            std::env::remove_var("MCP_SEARCH_LIMIT");
        }
    }

    #[test]
    fn test_feedback_endpoint_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_FEEDBACK_ENDPOINT", "https://relay.example.com/send");
        }
        let config = Config::from_env();
        assert_eq!(
            config.feedback.endpoint.as_deref(),
            Some("https://relay.example.com/send")
        );
        unsafe {
            std::env::remove_var("MCP_FEEDBACK_ENDPOINT");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let feedback = FeedbackConfig {
            endpoint: Some("https://relay.example.com".to_string()),
            api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", feedback);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
