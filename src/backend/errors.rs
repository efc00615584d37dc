//! # Backend Errors
//!
//! Errors raised while reaching the document store at startup.
//! Every one of them aborts startup; there is no retry path.

use thiserror::Error;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Backend connectivity errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Configuration could not be resolved
    #[error("Invalid backend configuration: {0}")]
    InvalidConfig(String),

    /// Client handle could not be built
    #[error("Backend connection failed: {0}")]
    Connection(String),

    /// Liveness probe against the primary failed
    #[error("Backend liveness probe failed: {0}")]
    Liveness(String),

    /// A startup stage ran past its deadline
    #[error("Backend {stage} timed out after {secs}s")]
    Timeout { stage: &'static str, secs: u64 },
}

impl BackendError {
    /// True for errors caused by configuration rather than the network
    pub fn is_config(&self) -> bool {
        matches!(self, BackendError::InvalidConfig(_))
    }
}
