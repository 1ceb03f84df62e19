//! Toolkit domain module.
//!
//! The cheminformatics toolkit is an external collaborator: structure parsing,
//! identifier derivation, descriptors, substructure alerts, MCS search and
//! scaffold hashing all live behind the [`Toolkit`] trait. This crate only
//! routes inputs to it and shapes its outputs.
//!
//! ## Implementations
//!
//! - `rdkit` - RDKit through its Python bindings (feature: `rdkit`)
//! - `fake` - deterministic stand-in used by the test suites

mod error;

#[cfg(feature = "rdkit")]
pub mod rdkit;

#[cfg(test)]
pub(crate) mod fake;

use serde::Serialize;
use std::fmt;

pub use error::{ToolkitError, ToolkitResult};

#[cfg(feature = "rdkit")]
pub use rdkit::RdkitToolkit;

/// The PAINS alert sets a filter catalog can be loaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertSet {
    PainsA,
    PainsB,
    PainsC,
}

impl AlertSet {
    /// The toolkit's own name for this catalog.
    pub fn catalog_name(&self) -> &'static str {
        match self {
            Self::PainsA => "PAINS_A",
            Self::PainsB => "PAINS_B",
            Self::PainsC => "PAINS_C",
        }
    }
}

impl fmt::Display for AlertSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_name())
    }
}

/// The descriptor set reported by `/descriptors`.
///
/// Fields are declared in lexicographic key order so the serialized object is
/// stable. Counts are carried as `f64` and serialize as floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Descriptors {
    #[serde(rename = "ClogP")]
    pub clogp: f64,
    #[serde(rename = "ExactMW")]
    pub exact_mw: f64,
    #[serde(rename = "NumHBA")]
    pub num_hba: f64,
    #[serde(rename = "NumHBD")]
    pub num_hbd: f64,
    #[serde(rename = "NumHeavyAtoms")]
    pub num_heavy_atoms: f64,
    #[serde(rename = "NumRings")]
    pub num_rings: f64,
    #[serde(rename = "NumRotatableBonds")]
    pub num_rotatable_bonds: f64,
    #[serde(rename = "TPSA")]
    pub tpsa: f64,
}

impl Descriptors {
    /// Serialized key names, in emission order.
    pub const KEYS: [&'static str; 8] = [
        "ClogP",
        "ExactMW",
        "NumHBA",
        "NumHBD",
        "NumHeavyAtoms",
        "NumRings",
        "NumRotatableBonds",
        "TPSA",
    ];
}

/// Capabilities the server needs from a cheminformatics toolkit.
///
/// Implementations must be safe to call from several worker threads at once;
/// a toolkit that is not may serialize internally.
pub trait Toolkit: Send + Sync + 'static {
    /// An owned molecule. Dropping it releases the toolkit-side object.
    type Molecule: Send + 'static;

    /// A compiled substructure filter catalog.
    type Catalog: Send + Sync + 'static;

    /// Parse a connection-table block. `Ok(None)` when no molecule results.
    fn mol_from_block(&self, block: &str) -> ToolkitResult<Option<Self::Molecule>>;

    /// Parse a line notation. `Ok(None)` when no molecule results.
    fn mol_from_line(&self, line: &str) -> ToolkitResult<Option<Self::Molecule>>;

    /// Derive the standard identifier straight from a block, bypassing the parser.
    fn block_to_identifier(&self, block: &str) -> ToolkitResult<String>;

    /// Derive the standard identifier of a parsed molecule.
    fn mol_to_identifier(&self, mol: &Self::Molecule) -> ToolkitResult<String>;

    /// Hash a standard identifier into its fixed-length key.
    ///
    /// May return an empty string for malformed identifiers.
    fn identifier_to_key(&self, identifier: &str) -> ToolkitResult<String>;

    /// Compute the descriptor set.
    fn descriptors(&self, mol: &Self::Molecule) -> ToolkitResult<Descriptors>;

    /// Build a filter catalog holding the given alert sets, in order.
    fn filter_catalog(&self, sets: &[AlertSet]) -> ToolkitResult<Self::Catalog>;

    /// Description of the first catalog entry matching `mol`, if any.
    fn first_match(
        &self,
        catalog: &Self::Catalog,
        mol: &Self::Molecule,
    ) -> ToolkitResult<Option<String>>;

    /// Maximum common substructure pattern across `mols`.
    fn find_mcs(&self, mols: &[Self::Molecule]) -> ToolkitResult<String>;

    /// Bemis-Murcko scaffold hash.
    fn murcko_scaffold(&self, mol: &Self::Molecule) -> ToolkitResult<String>;
}
