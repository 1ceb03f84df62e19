//! Property endpoints: descriptor set and scaffold hash.

mod descriptors;
mod murcko_scaffold;

pub use descriptors::DescriptorsEndpoint;
pub use murcko_scaffold::MurckoScaffoldEndpoint;
