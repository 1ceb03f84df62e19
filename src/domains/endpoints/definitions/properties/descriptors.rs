//! `/descriptors` endpoint.

use axum::{
    Json,
    extract::State,
    routing::{MethodRouter, post},
};
use bytes::Bytes;
use tracing::instrument;

use super::super::common::{CANT_CREATE_MOL, body_text};
use crate::core::ChemServer;
use crate::domains::endpoints::{EndpointError, EndpointResult};
use crate::domains::molecule::read_molecule;
use crate::domains::toolkit::{Descriptors, Toolkit};

/// A fixed set of common descriptors for a compound.
pub struct DescriptorsEndpoint;

impl DescriptorsEndpoint {
    /// Route path.
    pub const PATH: &'static str = "/descriptors";

    /// Description shown in the route listing.
    pub const DESCRIPTION: &'static str =
        "ClogP, ExactMW, NumHBA, NumHBD, NumHeavyAtoms, NumRings, NumRotatableBonds and TPSA";

    /// Answers a compact JSON object with exactly the eight descriptor keys.
    #[instrument(skip_all)]
    pub async fn handler<T: Toolkit>(
        State(server): State<ChemServer<T>>,
        body: Bytes,
    ) -> EndpointResult<Json<Descriptors>> {
        let input = body_text(&body);
        let descriptors = server
            .run(move |toolkit, _| -> EndpointResult<Descriptors> {
                let mol = read_molecule(toolkit, &input)?
                    .ok_or(EndpointError::invalid_molecule(CANT_CREATE_MOL))?;
                Ok(toolkit.descriptors(&mol)?)
            })
            .await??;
        Ok(Json(descriptors))
    }

    /// Build the route.
    pub fn create_route<T: Toolkit>() -> MethodRouter<ChemServer<T>> {
        post(Self::handler::<T>)
    }
}
