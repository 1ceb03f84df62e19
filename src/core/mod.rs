//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server:
//! command-line parsing, configuration, error handling, the server object
//! that owns the toolkit and filter catalog, and the HTTP transport.

pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
pub use server::ChemServer;
pub use transport::{HttpConfig, HttpTransport, TransportError};
