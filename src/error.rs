//! Error types for medir
//!
//! Numeric degeneracy (division by zero, log of a non-positive argument)
//! is deliberately NOT an error: it produces NaN/infinity in the affected
//! metric field and propagates unchanged into aggregation and output.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Medir error types
#[derive(Error, Debug)]
pub enum Error {
    /// True/predicted sequences violate the shape precondition
    #[error("invalid input shapes: y_true has {y_true} values, y_pred has {y_pred} (need equal, non-zero lengths)")]
    ShapeMismatch {
        /// Length of the true-value sequence
        y_true: usize,
        /// Length of the predicted-value sequence
        y_pred: usize,
    },

    /// Aggregation requested over zero run records
    #[error("cannot aggregate an empty run set")]
    EmptyRunSet,

    /// IO error (directory creation, file open/write)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
