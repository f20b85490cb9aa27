use thiserror::Error;

/// Core error type shared across passmu crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration violates internal invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by passmu crates.
pub type Result<T> = std::result::Result<T, Error>;
