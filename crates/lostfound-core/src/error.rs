use thiserror::Error;

/// Core error type shared across the tracker crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// A requested feature is not supported by the catalog model.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Convenience alias for results returned by the tracker crates.
pub type Result<T> = std::result::Result<T, Error>;
