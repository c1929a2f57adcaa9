//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines the defaults
//! used when a section or field is absent. `AppConfig` is the root struct.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Defaults
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "greeting_server=debug";

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Seconds to wait for open connections to drain on shutdown
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for in-flight requests after SIGTERM/SIGINT
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }

    /// Resolve `host:port` into the address to listen on.
    ///
    /// `host` may be an IP literal or a name such as `localhost`; for names
    /// the first address the resolver returns is used.
    pub async fn resolve_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.validate()?;
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| {
                ConfigError::Validation(format!("Cannot resolve http.host '{}': {}", self.host, e))
            })?
            .next()
            .ok_or_else(|| {
                ConfigError::Validation(format!("http.host '{}' has no addresses", self.host))
            })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Validation("http.host must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    ///
    /// Returns the config and whether the file was actually read.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, bool), ConfigError> {
        match Self::load(path) {
            Ok(config) => Ok((config, true)),
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok((Self::default(), false))
            }
            Err(e) => Err(e),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.http.validate()?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
