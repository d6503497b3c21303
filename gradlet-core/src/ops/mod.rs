//! # Scalar Operations Module (`ops`)
//!
//! Every operation eagerly computes its forward value and returns a new
//! [`Value`](crate::Value) that records its operands and an
//! [`Op`](crate::Op) tag selecting the local backward rule.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`,
//!   `mul_op`, `pow_op`, `relu_op`, ...) doing the forward computation and
//!   wiring the node into the graph.
//! - **Methods and operators:** `Value::pow`, `Value::relu`,
//!   `Value::sigmoid` and the `std::ops` impls in [`overload`] forward to the
//!   `_op` functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, and the derived neg, sub, div.
//! - [`activation`]: ReLU and sigmoid.

pub mod activation;
pub mod arithmetic;
mod overload;

pub use activation::{relu_op, sigmoid_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
