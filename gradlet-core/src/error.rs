use thiserror::Error;

/// Custom error type for the gradlet engine and its network layer.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradletError {
    #[error("Invalid exponent {0}: power requires a finite real exponent")]
    InvalidExponent(String),

    #[error("Unknown activation flag {0}: expected 0 (linear), 1 (ReLU) or 2 (sigmoid)")]
    UnknownActivation(u8),

    #[error("Input size mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Expected a single output but the network produces {width}")]
    NonScalarOutput { width: usize },

    #[error("Cannot overwrite the data of a computed (non-leaf) value")]
    NonLeafMutation,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
