//! Endpoints domain module.
//!
//! Each HTTP route is an endpoint: it reads the raw body, parses a molecule
//! when it needs one, makes one toolkit call and shapes the result.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual endpoint implementations (one file per route)
//! - `registry.rs` - Route table and router construction
//! - `error.rs` - Endpoint error type and its HTTP mapping
//!
//! ## Adding a New Endpoint
//!
//! 1. Create a new file in `definitions/` with `PATH`, `handler()` and `create_route()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;

pub use error::{EndpointError, EndpointResult};
pub use registry::{EndpointInfo, EndpointRegistry, build_router};
