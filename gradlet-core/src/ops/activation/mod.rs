// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linearities applied to a single value.
//!
//! ## Currently Implemented:
//! - [`relu_op`]: Rectified Linear Unit.
//! - [`sigmoid_op`]: logistic sigmoid.

pub mod relu;
pub mod sigmoid;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
