//! Error types for Tilawa Core

use std::time::Duration;
use thiserror::Error;

/// Result type alias using TilawaError
pub type Result<T> = std::result::Result<T, TilawaError>;

/// Top-level error type for all Tilawa operations
#[derive(Debug, Error)]
pub enum TilawaError {
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while resolving content from remote sources
///
/// `Transport`, `Timeout` and `MalformedResponse` are demoted to "try the next
/// source" inside a source chain and only reach callers through
/// [`Resolved::cause`](crate::Resolved::cause).
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transport failure for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Timed out after {}s", after.as_secs())]
    Timeout { after: Duration },

    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("All sources exhausted for {chain}")]
    ExhaustedFallback {
        chain: String,
        #[source]
        last: Option<Box<ResolveError>>,
    },
}

impl ResolveError {
    /// Whether this failure (or the last failure of an exhausted chain) was a timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            ResolveError::Timeout { .. } => true,
            ResolveError::ExhaustedFallback {
                last: Some(last), ..
            } => last.is_timeout(),
            _ => false,
        }
    }
}

/// Errors that occur in the user state store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    BackendError(String),
}
