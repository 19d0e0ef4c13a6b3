//! Classify metadata errors into retry policy error kinds.

use crate::error::MetadataError;
use crate::retry::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code as u16),
        _ => ErrorKind::Other,
    }
}

/// Classify a fetch error into an ErrorKind.
pub fn classify(e: &MetadataError) -> ErrorKind {
    match e {
        MetadataError::Timeout => ErrorKind::Timeout,
        MetadataError::Transport(ce) => {
            if ce.is_couldnt_connect()
                || ce.is_couldnt_resolve_host()
                || ce.is_read_error()
                || ce.is_recv_error()
                || ce.is_send_error()
                || ce.is_got_nothing()
            {
                ErrorKind::Connection
            } else {
                ErrorKind::Other
            }
        }
        MetadataError::HttpStatus { status, .. } => classify_http_status(*status),
        MetadataError::InvalidType(_)
        | MetadataError::ArgumentCountMismatch { .. }
        | MetadataError::Task(_) => ErrorKind::Other,
    }
}
