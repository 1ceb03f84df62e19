//! Substructure endpoints: PAINS alerts and maximum common substructure.

mod mcs;
mod pains_filters;

pub use mcs::McsEndpoint;
pub use pains_filters::PainsFiltersEndpoint;
