//! Readiness probe.

use axum::routing::{MethodRouter, get};

use crate::core::ChemServer;
use crate::domains::toolkit::Toolkit;

/// `/ready` - answers `1` as long as the process is serving.
pub struct ReadyEndpoint;

impl ReadyEndpoint {
    /// Route path.
    pub const PATH: &'static str = "/ready";

    /// Description shown in the route listing.
    pub const DESCRIPTION: &'static str = "Liveness/readiness probe; always answers 1";

    /// The probe body.
    pub async fn handler() -> &'static str {
        "1"
    }

    /// Build the route. GET is the documented method; POST is accepted too.
    pub fn create_route<T: Toolkit>() -> MethodRouter<ChemServer<T>> {
        get(Self::handler).post(Self::handler)
    }
}
