//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the server
//! configuration from a YAML file and overlaying environment variables.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LogFormat, ServerConfig};

/// Environment variable naming an optional YAML configuration file.
pub const ENV_CONFIG_PATH: &str = "PRORATION_CONFIG";
/// Environment variable overriding the listening port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable overriding the bind interface.
pub const ENV_HOST: &str = "HOST";
/// Environment variable overriding the deployment environment name.
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
/// Environment variable overriding the log format.
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Loads and provides access to the server configuration.
///
/// Values are layered: built-in defaults, then an optional YAML file, then
/// environment variables.
///
/// # File Format
///
/// ```text
/// host: 0.0.0.0
/// port: 8080
/// environment: production
/// log_format: json
/// ```
///
/// # Example
///
/// ```no_run
/// use rent_proration::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/server.yaml")?.with_process_env()?;
/// println!("Binding to {}", loader.config().bind_address());
/// # Ok::<(), rent_proration::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or unknown keys
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Builds the configuration from the process environment.
    ///
    /// Loads the file named by `PRORATION_CONFIG` when it is set, then
    /// applies the `PORT`, `HOST`, `ENVIRONMENT` and `LOG_FORMAT` overrides.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from variables read through `lookup`.
    ///
    /// Same layering as [`ConfigLoader::from_env`].
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup(ENV_CONFIG_PATH) {
            Some(path) if !path.trim().is_empty() => Self::load(path.trim())?,
            _ => Self::default(),
        };

        base.with_env_overrides(lookup)
    }

    /// Applies overrides from the process environment.
    pub fn with_process_env(self) -> EngineResult<Self> {
        self.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Unset or blank variables leave the current value in place.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(port) = get(ENV_PORT) {
            self.config.port = port.parse().map_err(|_| EngineError::InvalidConfigValue {
                key: ENV_PORT.to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }

        if let Some(host) = get(ENV_HOST) {
            self.config.host = host;
        }

        if let Some(environment) = get(ENV_ENVIRONMENT) {
            self.config.environment = environment;
        }

        if let Some(format) = get(ENV_LOG_FORMAT) {
            self.config.log_format =
                format
                    .parse::<LogFormat>()
                    .map_err(|message| EngineError::InvalidConfigValue {
                        key: ENV_LOG_FORMAT.to_string(),
                        message,
                    })?;
        }

        Ok(self)
    }

    /// Returns the loaded server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Consumes the loader and returns the server configuration.
    pub fn into_config(self) -> ServerConfig {
        self.config
    }
}
