//! Configuration loading and management for the rent proration server.
//!
//! This module provides the server configuration (bind address, deployment
//! environment, log format), loaded from an optional YAML file and
//! overridden by environment variables.
//!
//! # Example
//!
//! ```no_run
//! use rent_proration::config::ConfigLoader;
//!
//! let config = ConfigLoader::from_env().unwrap().into_config();
//! println!("Listening on {}", config.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{
    ConfigLoader, ENV_CONFIG_PATH, ENV_ENVIRONMENT, ENV_HOST, ENV_LOG_FORMAT, ENV_PORT,
};
pub use types::{DEFAULT_ENVIRONMENT, DEFAULT_HOST, DEFAULT_PORT, LogFormat, ServerConfig};
