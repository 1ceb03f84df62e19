//! `/inchi2inchikey` endpoint.

use axum::{
    extract::State,
    routing::{MethodRouter, post},
};
use bytes::Bytes;
use tracing::instrument;

use super::super::common::body_text;
use crate::core::ChemServer;
use crate::domains::endpoints::EndpointResult;
use crate::domains::toolkit::Toolkit;

/// InChIKey for an InChI.
pub struct Inchi2InchikeyEndpoint;

impl Inchi2InchikeyEndpoint {
    /// Route path.
    pub const PATH: &'static str = "/inchi2inchikey";

    /// Description shown in the route listing.
    pub const DESCRIPTION: &'static str = "InChIKey for an InChI";

    /// Malformed identifiers get an empty key, still with 200.
    #[instrument(skip_all)]
    pub async fn handler<T: Toolkit>(
        State(server): State<ChemServer<T>>,
        body: Bytes,
    ) -> EndpointResult<String> {
        let inchi = body_text(&body);
        let key = server
            .run(move |toolkit, _| toolkit.identifier_to_key(&inchi))
            .await??;
        Ok(key)
    }

    /// Build the route.
    pub fn create_route<T: Toolkit>() -> MethodRouter<ChemServer<T>> {
        post(Self::handler::<T>)
    }
}
