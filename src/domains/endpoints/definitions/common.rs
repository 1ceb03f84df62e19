//! Shared helpers for endpoint definitions.

use bytes::Bytes;

/// Response text for single-molecule endpoints that cannot parse their input.
pub const CANT_CREATE_MOL: &str = "Can't create mol object from input";

/// Response text used by `/painsFilters` for the same condition.
pub const CANNOT_CREATE_MOLECULE: &str = "Cannot create molecule from input";

/// Decode a raw request body.
///
/// Invalid UTF-8 is replaced rather than rejected; the toolkit then refuses
/// the input like any other malformed structure.
pub fn body_text(body: &Bytes) -> String {
    String::from_utf8_lossy(body).into_owned()
}
