//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 9080;

/// Default size of the worker pool.
pub const DEFAULT_THREADS: usize = 2;

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Number of workers serving requests.
    pub threads: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            threads: DEFAULT_THREADS,
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config listening on every IPv4 interface.
    pub fn new(port: u16, threads: usize) -> Self {
        Self {
            port,
            threads,
            ..Default::default()
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {} ({} workers)", self.address(), self.threads)
    }
}
