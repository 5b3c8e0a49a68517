//! LUT error types.

use srgb_transfer::TransferError;
use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building or emitting tables.
#[derive(Debug, Error)]
pub enum LutError {
    /// Transfer function rejected a table input.
    #[error("transfer function error: {0}")]
    Transfer(#[from] TransferError),

    /// Text formatting failed.
    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
