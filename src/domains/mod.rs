//! Domains module containing business logic organized by bounded contexts.
//!
//! - **toolkit**: the seam to the external cheminformatics toolkit
//! - **molecule**: input classification and parsing
//! - **filters**: the shared PAINS filter catalog
//! - **endpoints**: one handler per HTTP route

pub mod endpoints;
pub mod filters;
pub mod molecule;
pub mod toolkit;
