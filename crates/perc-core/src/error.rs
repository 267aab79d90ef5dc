//! Error types for the combinatorics engine.

use thiserror::Error;

/// Result type for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur before a computation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The calculation type was neither `perm` nor `comb`.
    #[error("Invalid calculation_type. Use 'perm' or 'comb'")]
    InvalidMode { value: String },
}

impl CoreError {
    /// Create an invalid mode error for the rejected input.
    pub fn invalid_mode(value: impl Into<String>) -> Self {
        Self::InvalidMode {
            value: value.into(),
        }
    }
}
