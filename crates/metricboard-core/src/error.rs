use thiserror::Error;

/// Core error type shared across Metricboard crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A dashboard source failed to produce a payload.
    #[error("source error: {0}")]
    Source(String),
    /// The payload violates internal invariants.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    /// A requested capability is not wired in.
    #[error("unsupported: {0}")]
    Unsupported(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Metricboard crates.
pub type Result<T> = std::result::Result<T, Error>;
