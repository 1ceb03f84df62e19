//! Endpoint definitions, one file per route.

pub mod common;
pub mod identifiers;
pub mod properties;
pub mod ready;
pub mod substructure;

pub use identifiers::{Inchi2InchikeyEndpoint, Mol2InchiEndpoint, Molblock2InchiEndpoint};
pub use properties::{DescriptorsEndpoint, MurckoScaffoldEndpoint};
pub use ready::ReadyEndpoint;
pub use substructure::{McsEndpoint, PainsFiltersEndpoint};
