//! Endpoint error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

use crate::domains::toolkit::ToolkitError;

/// Result type for endpoint handlers.
pub type EndpointResult<T> = Result<T, EndpointError>;

/// Errors an endpoint can answer with.
///
/// There is no structured error body: every variant becomes a plain-text
/// 500 response.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The body did not yield a molecule. Carries the endpoint's exact message.
    #[error("{0}")]
    InvalidMolecule(&'static str),

    /// The toolkit failed for a reason other than sanitization.
    #[error("{0}")]
    Toolkit(#[from] ToolkitError),

    /// The blocking worker running the request panicked or was cancelled.
    #[error("Worker failed: {0}")]
    Worker(#[from] JoinError),
}

impl EndpointError {
    /// Create an invalid-molecule error with the given response text.
    pub fn invalid_molecule(message: &'static str) -> Self {
        Self::InvalidMolecule(message)
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        if !matches!(self, Self::InvalidMolecule(_)) {
            error!("Request failed: {}", self);
        }
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
