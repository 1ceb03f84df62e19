//! Configuration management for the server.
//!
//! The listener is configured entirely from the command line; no
//! environment variables are consulted apart from `RUST_LOG`, which only
//! tunes diagnostic verbosity.

use serde::{Deserialize, Serialize};

use super::cli::Cli;
use super::error::{Error, Result};
use super::transport::HttpConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub transport: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in diagnostics.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration from parsed command-line arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();
        config.transport.port = cli.port;
        config.transport.threads = cli.threads;
        config
    }

    /// Reject settings the listener cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.transport.threads == 0 {
            return Err(Error::config("worker thread count must be at least 1"));
        }
        Ok(())
    }
}
