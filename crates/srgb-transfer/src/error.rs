//! Transfer function error types.

use thiserror::Error;

/// Result type for transfer function operations.
pub type TransferResult<T> = Result<T, TransferError>;

/// Errors that can occur when evaluating a transfer function.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransferError {
    /// Input outside the closed unit interval (NaN included).
    #[error("value {value} is outside the valid input range [0, 1]")]
    OutOfRange {
        /// The rejected input
        value: f64,
    },
}
