//! Identifier endpoints: standard identifier and hashed key derivation.

mod inchi2inchikey;
mod mol2inchi;
mod molblock2inchi;

pub use inchi2inchikey::Inchi2InchikeyEndpoint;
pub use mol2inchi::Mol2InchiEndpoint;
pub use molblock2inchi::Molblock2InchiEndpoint;
