//! Cheminformatics HTTP API Library
//!
//! A stateless request/response service exposing a handful of
//! cheminformatics primitives over HTTP: structure parsing, InChI and
//! InChIKey derivation, descriptors, PAINS alerts, maximum common
//! substructure and Bemis-Murcko scaffolds. The chemistry itself is done by
//! an external toolkit (RDKit with the `rdkit` feature); this crate
//! classifies inputs, dispatches to the toolkit and shapes responses.
//!
//! # Architecture
//!
//! - **core**: CLI, configuration, error handling, the server object and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **toolkit**: the `Toolkit` trait and its RDKit adapter
//!   - **molecule**: the input classifier
//!   - **filters**: the process-wide PAINS catalog
//!   - **endpoints**: route handlers and the route table
//!
//! # Example
//!
//! ```rust,ignore
//! use chem_api_server::core::{ChemServer, Config, HttpTransport};
//! use chem_api_server::domains::toolkit::RdkitToolkit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let server = ChemServer::new(config.clone(), RdkitToolkit::new()?)?;
//!     HttpTransport::new(config.transport).init(server).await?.serve().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{ChemServer, Config, Error, Result};
pub use domains::toolkit::Toolkit;
