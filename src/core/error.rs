//! Error types and handling for the server.
//!
//! This module defines a unified error type for everything that can go wrong
//! while the server starts up. Per-request failures are handled by the
//! endpoints domain and never reach this type.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::toolkit::ToolkitError;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The toolkit could not be set up.
    #[error("Toolkit error: {0}")]
    Toolkit(#[from] ToolkitError),

    /// The HTTP listener failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// I/O errors from the runtime or the network.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
