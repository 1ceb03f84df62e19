//! `/molblock2inchi` endpoint.

use axum::{
    extract::State,
    routing::{MethodRouter, post},
};
use bytes::Bytes;
use tracing::{debug, instrument};

use super::super::common::body_text;
use crate::core::ChemServer;
use crate::domains::endpoints::EndpointResult;
use crate::domains::toolkit::Toolkit;

/// InChI straight from a connection-table block, without the toolkit parser.
pub struct Molblock2InchiEndpoint;

impl Molblock2InchiEndpoint {
    /// Route path.
    pub const PATH: &'static str = "/molblock2inchi";

    /// Description shown in the route listing.
    pub const DESCRIPTION: &'static str = "InChI for a molblock, bypassing structure parsing";

    /// Whatever the toolkit produces is returned with 200, empty included.
    #[instrument(skip_all)]
    pub async fn handler<T: Toolkit>(
        State(server): State<ChemServer<T>>,
        body: Bytes,
    ) -> EndpointResult<String> {
        let block = body_text(&body);
        let inchi = server
            .run(move |toolkit, _| toolkit.block_to_identifier(&block))
            .await??;
        debug!("Derived identifier of {} bytes", inchi.len());
        Ok(inchi)
    }

    /// Build the route.
    pub fn create_route<T: Toolkit>() -> MethodRouter<ChemServer<T>> {
        post(Self::handler::<T>)
    }
}
