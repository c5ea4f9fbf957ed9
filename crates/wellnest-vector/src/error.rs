//! Error types for wellnest-vector.

use thiserror::Error;

/// Result type for wellnest-vector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wellnest-vector operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Dimension mismatch between a vector and the index.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions.
        expected: usize,
        /// Actual dimensions provided.
        actual: usize,
    },

    /// Invalid vector (e.g., empty, contains NaN or Inf).
    #[error("Invalid vector: {0}")]
    InvalidVector(String),

    /// Persistence error (serialization, malformed snapshot, etc.).
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
