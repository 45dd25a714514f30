use thiserror::Error;

/// Core error type shared across readiness crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset unit cannot be represented as a frame.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    /// The hints document is present but unusable.
    #[error("invalid hints: {0}")]
    InvalidHints(String),
    /// Filesystem access failed while evaluating a dataset unit.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by readiness crates.
pub type Result<T> = std::result::Result<T, Error>;
