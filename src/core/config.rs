//! Configuration management for the MCP server.
//!
//! All configuration is resolved once at startup and injected into the
//! components that need it; nothing reads the environment at request time.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Discovery domain configuration (data directory, remote manifest).
    pub discovery: DiscoveryConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the discovery domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directory holding the bundled artifacts (capabilities, schemas,
    /// optional OpenAPI document).
    pub data_dir: PathBuf,

    /// Base URL of the live RiskModels API. When set, manifest resolution
    /// tries `<base>/.well-known/agent-manifest.json` before falling back
    /// to the local synthesized manifest.
    pub api_base: Option<String>,

    /// Timeout in seconds for the single remote manifest fetch.
    pub fetch_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            api_base: None,
            fetch_timeout_secs: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "riskmodels-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            discovery: DiscoveryConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
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
    /// Server-level variables use the `MCP_` prefix; the remote base URL
    /// keeps the upstream-facing name `RISKMODELS_API_BASE`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(data_dir) = std::env::var("MCP_DATA_DIR") {
            config.discovery.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(api_base) = std::env::var("RISKMODELS_API_BASE") {
            config.discovery.api_base = Some(api_base);
            info!("Live manifest enabled via RISKMODELS_API_BASE");
        } else {
            info!("RISKMODELS_API_BASE not set - manifest resolution is local-only");
        }

        if let Ok(timeout) = std::env::var("MCP_FETCH_TIMEOUT_SECS")
            && let Ok(secs) = timeout.parse()
        {
            config.discovery.fetch_timeout_secs = secs;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

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
    fn test_api_base_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("RISKMODELS_API_BASE", "https://api.riskmodels.example");
        }
        let config = Config::from_env();
        assert_eq!(
            config.discovery.api_base.as_deref(),
            Some("https://api.riskmodels.example")
        );
        unsafe {
            std::env::remove_var("RISKMODELS_API_BASE");
        }
    }

    #[test]
    fn test_api_base_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("RISKMODELS_API_BASE");
        }
        let config = Config::from_env();
        assert!(config.discovery.api_base.is_none());
    }

    #[test]
    fn test_data_dir_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DATA_DIR", "/var/lib/riskmodels");
        }
        let config = Config::from_env();
        assert_eq!(
            config.discovery.data_dir,
            PathBuf::from("/var/lib/riskmodels")
        );
        unsafe {
            std::env::remove_var("MCP_DATA_DIR");
        }
    }

    #[test]
    fn test_fetch_timeout_default() {
        let config = Config::default();
        assert_eq!(config.discovery.fetch_timeout_secs, 5);
    }

    #[test]
    fn test_fetch_timeout_ignores_garbage() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_FETCH_TIMEOUT_SECS", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.discovery.fetch_timeout_secs, 5);
        unsafe {
            std::env::remove_var("MCP_FETCH_TIMEOUT_SECS");
        }
    }
}
