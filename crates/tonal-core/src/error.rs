//! Error types for tonal

use thiserror::Error;

/// Result type for tonal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tonal operations
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Matrix has no inverse (zero determinant or zero pivot)
    #[error("Matrix is singular")]
    SingularMatrix,

    /// Matrix handed to the kernel is ragged or not square
    #[error("Matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// Gamut name with no registered XYZ matrices
    #[error("Unsupported gamut: {0}")]
    UnsupportedGamut(String),

    /// Palette or scheme configuration out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed RRGGBB string
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
