//! Error types for affinekit

use thiserror::Error;

/// Errors raised by the fallible helpers around the transformation core.
///
/// The core operations themselves (`matrix`, `apply`, `add`, save and
/// restore) are total and never produce these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Transformation is not invertible (determinant {determinant})")]
    NotInvertible { determinant: f64 },

    #[error("Matrix is not affine: bottom row is {row:?}, expected [0, 0, 0, 1]")]
    NotAffine { row: [f64; 4] },
}

/// Result type alias for affinekit operations
pub type Result<T> = std::result::Result<T, Error>;
