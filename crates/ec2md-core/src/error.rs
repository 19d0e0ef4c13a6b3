//! Error type shared by the resolver, the fetcher and the retry helper.

use thiserror::Error;

/// Failure of a metadata lookup.
///
/// `InvalidType` and `ArgumentCountMismatch` are produced before any I/O.
/// The rest come from the HTTP exchange itself. A 404 is not an error: it
/// resolves to `Ok(None)` at the fetcher.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The symbolic type is not in the catalog.
    #[error("not a valid EC2 metadata type: {0}")]
    InvalidType(String),

    /// A templated type got the wrong number of arguments.
    #[error("incorrect number of arguments for {type_name}: expected {expected}, got {actual}")]
    ArgumentCountMismatch {
        type_name: String,
        expected: usize,
        actual: usize,
    },

    /// Non-2xx, non-404 response. Carries the response body as detail.
    #[error("metadata service returned HTTP {status}: {body}")]
    HttpStatus { status: u32, body: String },

    /// Connection-level failure reported by curl.
    #[error("metadata request failed: {0}")]
    Transport(#[source] curl::Error),

    /// The request deadline elapsed; the transfer was aborted.
    #[error("EC2 metadata fetch timed out")]
    Timeout,

    /// The blocking transfer task panicked or was cancelled.
    #[error("metadata transfer task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<curl::Error> for MetadataError {
    fn from(e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            MetadataError::Timeout
        } else {
            MetadataError::Transport(e)
        }
    }
}

impl MetadataError {
    /// True for the validation failures that never reach the network.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MetadataError::InvalidType(_) | MetadataError::ArgumentCountMismatch { .. }
        )
    }
}
