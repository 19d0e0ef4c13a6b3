//! Map a completed HTTP exchange to a fetch result.

use crate::error::MetadataError;

/// 2xx → content, 404 → absent, anything else → `HttpStatus`.
pub(crate) fn classify_response(code: u32, body: String) -> Result<Option<String>, MetadataError> {
    match code {
        200..=299 => Ok(Some(body)),
        // Valid request, no value on this host (e.g. public-ipv4 of a VPC instance without one).
        404 => Ok(None),
        status => Err(MetadataError::HttpStatus { status, body }),
    }
}
