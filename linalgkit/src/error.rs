//! Error types for matrix construction, reduction and solving

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,

    #[error("no vectors supplied")]
    NoVectors,

    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("entry at row {row}, column {column} is not a finite number")]
    NonFiniteEntry { row: usize, column: usize },

    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("could not parse `{0}` as a number")]
    ParseEntry(String),
}

pub type Result<T> = std::result::Result<T, LinalgError>;
