//! Molecule domain module.
//!
//! Turns a raw request body into a parsed molecule: decides whether the body
//! is a connection-table block or a line notation, then hands it to the
//! matching toolkit parser.

mod classifier;

pub use classifier::{InputFormat, MOL_BLOCK_END, read_molecule};
