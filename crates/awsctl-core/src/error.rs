//! Error types for the awsctl core.

/// Core error type for awsctl infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Invalid AWS region identifier.
    #[error("invalid AWS region: {0:?} (expected a name such as us-east-1)")]
    InvalidRegion(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
