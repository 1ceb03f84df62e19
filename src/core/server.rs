//! Server object and shared request state.
//!
//! `ChemServer` owns the toolkit and the PAINS filter catalog. It is cloned
//! into every request; clones share the same immutable toolkit and catalog.
//! Toolkit work runs on tokio's blocking pool through [`ChemServer::run`],
//! which the runtime caps at the configured worker count.

use std::sync::Arc;
use tokio::task::JoinError;
use tracing::info;

use super::config::Config;
use super::error::Result;
use crate::domains::filters::PainsCatalog;
use crate::domains::toolkit::Toolkit;

/// The main server object.
pub struct ChemServer<T: Toolkit> {
    /// Server configuration.
    config: Arc<Config>,

    /// The cheminformatics toolkit.
    toolkit: Arc<T>,

    /// PAINS catalog, populated before the first request.
    catalog: Arc<PainsCatalog<T>>,
}

impl<T: Toolkit> Clone for ChemServer<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            toolkit: self.toolkit.clone(),
            catalog: self.catalog.clone(),
        }
    }
}

impl<T: Toolkit> ChemServer<T> {
    /// Create a new server, loading the filter catalog up front.
    pub fn new(config: Config, toolkit: T) -> Result<Self> {
        let catalog = PainsCatalog::load(&toolkit)?;
        info!("Server initialized");

        Ok(Self {
            config: Arc::new(config),
            toolkit: Arc::new(toolkit),
            catalog: Arc::new(catalog),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the toolkit.
    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Get the filter catalog.
    pub fn catalog(&self) -> &PainsCatalog<T> {
        &self.catalog
    }

    /// Run a toolkit job to completion on a blocking worker.
    pub async fn run<F, R>(&self, job: F) -> std::result::Result<R, JoinError>
    where
        F: FnOnce(&T, &PainsCatalog<T>) -> R + Send + 'static,
        R: Send + 'static,
    {
        let toolkit = self.toolkit.clone();
        let catalog = self.catalog.clone();
        tokio::task::spawn_blocking(move || job(&*toolkit, &*catalog)).await
    }
}
