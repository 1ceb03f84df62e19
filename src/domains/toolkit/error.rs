//! Toolkit error types.

use thiserror::Error;

/// Result type for toolkit operations.
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Errors raised by the cheminformatics toolkit.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// The toolkit refused to sanitize a parsed structure.
    ///
    /// The input classifier demotes this kind to "no molecule".
    #[error("Sanitization failed: {0}")]
    Sanitization(String),

    /// The toolkit could not be loaded or initialized.
    #[error("Toolkit unavailable: {0}")]
    Unavailable(String),

    /// Any other failure inside a toolkit call.
    #[error("Toolkit failure: {0}")]
    Failure(String),
}

impl ToolkitError {
    /// Create a sanitization error.
    pub fn sanitization(msg: impl Into<String>) -> Self {
        Self::Sanitization(msg.into())
    }

    /// Create an "unavailable" error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a generic failure.
    pub fn failure(msg: impl Into<String>) -> Self {
        Self::Failure(msg.into())
    }

    /// Whether the classifier should treat this error as "no molecule".
    pub fn is_sanitization(&self) -> bool {
        matches!(self, Self::Sanitization(_))
    }
}
