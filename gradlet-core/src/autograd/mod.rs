//! # Autograd
//!
//! Reverse-mode differentiation over the graph of [`Value`] nodes.
//!
//! - [`backward_op`]: the [`Op`] tag stored on every node and its local
//!   chain-rule step.
//! - [`graph`]: topological ordering of a node's ancestry.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use graph::build_topo;

use crate::value::Value;

/// Resets the gradient of every listed node to exactly 0.
///
/// Call this on a parameter set before each fresh backward pass; otherwise
/// the next pass accumulates on top of the old gradients.
pub fn zero_grad<'a, I>(values: I)
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut count = 0usize;
    for value in values {
        value.zero_grad();
        count += 1;
    }
    log::trace!("zero_grad: reset {} gradient(s)", count);
}

#[cfg(test)]
#[path = "autograd_test.rs"]
mod tests;
