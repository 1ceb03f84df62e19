//! `/mol2inchi` endpoint.

use axum::{
    extract::State,
    routing::{MethodRouter, post},
};
use bytes::Bytes;
use tracing::instrument;

use super::super::common::{CANT_CREATE_MOL, body_text};
use crate::core::ChemServer;
use crate::domains::endpoints::{EndpointError, EndpointResult};
use crate::domains::molecule::read_molecule;
use crate::domains::toolkit::Toolkit;

/// InChI for a molblock or SMILES, parsed by the toolkit first.
pub struct Mol2InchiEndpoint;

impl Mol2InchiEndpoint {
    /// Route path.
    pub const PATH: &'static str = "/mol2inchi";

    /// Description shown in the route listing.
    pub const DESCRIPTION: &'static str = "InChI for a molblock or SMILES";

    #[instrument(skip_all)]
    pub async fn handler<T: Toolkit>(
        State(server): State<ChemServer<T>>,
        body: Bytes,
    ) -> EndpointResult<String> {
        let input = body_text(&body);
        server
            .run(move |toolkit, _| -> EndpointResult<String> {
                let mol = read_molecule(toolkit, &input)?
                    .ok_or(EndpointError::invalid_molecule(CANT_CREATE_MOL))?;
                Ok(toolkit.mol_to_identifier(&mol)?)
            })
            .await?
    }

    /// Build the route.
    pub fn create_route<T: Toolkit>() -> MethodRouter<ChemServer<T>> {
        post(Self::handler::<T>)
    }
}
