//! Filters domain module.
//!
//! Holds the process-wide PAINS filter catalog. The catalog is built once
//! while the server is constructed and is read-only afterwards, so every
//! worker shares it without locking.

use tracing::{info, instrument};

use crate::domains::toolkit::{AlertSet, Toolkit, ToolkitResult};

/// Alert sets loaded into the catalog, in load order.
pub const PAINS_SETS: [AlertSet; 3] = [AlertSet::PainsA, AlertSet::PainsB, AlertSet::PainsC];

/// The preloaded PAINS catalog.
pub struct PainsCatalog<T: Toolkit> {
    catalog: T::Catalog,
    sets: Vec<AlertSet>,
}

impl<T: Toolkit> PainsCatalog<T> {
    /// Build the catalog with PAINS A, B and C.
    #[instrument(skip_all)]
    pub fn load(toolkit: &T) -> ToolkitResult<Self> {
        let catalog = toolkit.filter_catalog(&PAINS_SETS)?;
        info!("PAINS filter catalog loaded ({} alert sets)", PAINS_SETS.len());
        Ok(Self {
            catalog,
            sets: PAINS_SETS.to_vec(),
        })
    }

    /// The alert sets this catalog was built from.
    pub fn sets(&self) -> &[AlertSet] {
        &self.sets
    }

    /// Description of the first alert matching `mol`, if any.
    ///
    /// Only the first match is reported even when several alerts apply.
    pub fn first_alert(&self, toolkit: &T, mol: &T::Molecule) -> ToolkitResult<Option<String>> {
        toolkit.first_match(&self.catalog, mol)
    }
}
