//! Configuration types for the proration server.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default interface the server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;
/// Default deployment environment name reported by the health check.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}', expected 'text' or 'json'", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Server configuration.
///
/// Every field has a default, so a configuration file only needs the keys
/// it wants to change.
///
/// # Example
///
/// ```
/// use rent_proration::config::ServerConfig;
///
/// let config = ServerConfig::default();
/// assert_eq!(config.bind_address(), "0.0.0.0:8080");
/// assert_eq!(config.environment, "development");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// The interface to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The deployment environment name (e.g., "development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,
    /// The log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` address to bind the listener to.
    ///
    /// IPv6 hosts are wrapped in brackets.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
