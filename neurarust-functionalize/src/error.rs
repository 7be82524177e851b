use crate::types::DType;
use thiserror::Error;

/// Recoverable error type for NeuraRust functionalization and its tensor backend.
///
/// Unsupported view operators are *not* reported through this type: their
/// inverses are unconditional internal assertions and panic instead
/// (see [`crate::functionalization::guards`]).
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NeuraRustError {
    #[error("Dimension out of range (expected to be in range of [{min}, {max}], but got {dim})")]
    DimOutOfRange { dim: i64, min: i64, max: i64 },

    #[error("Index {index} is out of bounds for dimension {dim} with size {size}")]
    IndexOutOfRange { index: i64, dim: usize, size: usize },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Rank mismatch: expected {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Invalid permutation: dims {dims:?} are not a valid permutation for rank {rank}")]
    InvalidPermutation { dims: Vec<i64>, rank: usize },

    #[error("Invalid view in {operation}: {reason}")]
    InvalidView { operation: String, reason: String },

    #[error("Storage out of bounds in {operation}: layout needs {required} elements but storage holds {available}")]
    StorageOutOfBounds {
        required: usize,
        available: usize,
        operation: String,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Data type mismatch for operation '{operation}': expected {expected:?}, got {actual:?}")]
    DataTypeMismatch {
        expected: DType,
        actual: DType,
        operation: String,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl NeuraRustError {
    pub(crate) fn invalid_view(operation: &str, reason: impl Into<String>) -> Self {
        NeuraRustError::InvalidView {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
