//! `/painsFilters` endpoint.

use axum::{
    Json,
    extract::State,
    routing::{MethodRouter, post},
};
use bytes::Bytes;
use tracing::{debug, instrument};

use super::super::common::{CANNOT_CREATE_MOLECULE, body_text};
use crate::core::ChemServer;
use crate::domains::endpoints::{EndpointError, EndpointResult};
use crate::domains::molecule::read_molecule;
use crate::domains::toolkit::Toolkit;

/// PAINS alert for a compound.
pub struct PainsFiltersEndpoint;

impl PainsFiltersEndpoint {
    /// Route path.
    pub const PATH: &'static str = "/painsFilters";

    /// Description shown in the route listing.
    pub const DESCRIPTION: &'static str = "First matching PAINS alert (A, B, C) for a molblock or SMILES";

    /// Answers a JSON array holding the description of the first matching
    /// alert, or an empty array. Later matches are never reported.
    #[instrument(skip_all)]
    pub async fn handler<T: Toolkit>(
        State(server): State<ChemServer<T>>,
        body: Bytes,
    ) -> EndpointResult<Json<Vec<String>>> {
        let input = body_text(&body);
        let alerts = server
            .run(move |toolkit, catalog| -> EndpointResult<Vec<String>> {
                let mol = read_molecule(toolkit, &input)?
                    .ok_or(EndpointError::invalid_molecule(CANNOT_CREATE_MOLECULE))?;
                Ok(catalog.first_alert(toolkit, &mol)?.into_iter().collect())
            })
            .await??;
        debug!("{} PAINS alert(s)", alerts.len());
        Ok(Json(alerts))
    }

    /// Build the route.
    pub fn create_route<T: Toolkit>() -> MethodRouter<ChemServer<T>> {
        post(Self::handler::<T>)
    }
}
