//! `/mcs` endpoint.

use axum::{
    extract::State,
    routing::{MethodRouter, post},
};
use bytes::Bytes;
use tracing::{debug, instrument, warn};

use super::super::common::body_text;
use crate::core::ChemServer;
use crate::domains::endpoints::EndpointResult;
use crate::domains::toolkit::Toolkit;

/// Maximum common substructure of a set of SMILES.
pub struct McsEndpoint;

impl McsEndpoint {
    /// Route path.
    pub const PATH: &'static str = "/mcs";

    /// Description shown in the route listing.
    pub const DESCRIPTION: &'static str = "Maximum common substructure of newline-separated SMILES";

    /// Lines that do not parse are skipped with a diagnostic; the request
    /// always succeeds with whatever pattern the remaining molecules give.
    #[instrument(skip_all)]
    pub async fn handler<T: Toolkit>(
        State(server): State<ChemServer<T>>,
        body: Bytes,
    ) -> EndpointResult<String> {
        let input = body_text(&body);
        server
            .run(move |toolkit, _| -> EndpointResult<String> {
                let mut mols = Vec::new();
                for line in split_lines(&input) {
                    match toolkit.mol_from_line(line) {
                        Ok(Some(mol)) => mols.push(mol),
                        Ok(None) => warn!("Can't create mol object from : '{}'", line),
                        Err(e) if e.is_sanitization() => warn!("{}\t{}", e, line),
                        Err(e) => return Err(e.into()),
                    }
                }
                debug!("Searching MCS over {} molecule(s)", mols.len());
                Ok(toolkit.find_mcs(&mols)?)
            })
            .await?
    }

    /// Build the route.
    pub fn create_route<T: Toolkit>() -> MethodRouter<ChemServer<T>> {
        post(Self::handler::<T>)
    }
}

/// Split a body into lines the way a line reader does: a trailing newline
/// does not produce an empty last line, and `\r` is kept.
fn split_lines(body: &str) -> impl Iterator<Item = &str> {
    body.split_terminator('\n')
}
