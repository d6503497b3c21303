// gradlet-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::value::Value;
use std::iter::Sum;

// --- Forward Operation ---

/// Adds two values: `out = a + b`.
///
/// Backward: `a.grad += out.grad` and `b.grad += out.grad`. Passing the same
/// node twice (`a + a`) records it twice, so it receives both contributions.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Op::Add, vec![a.clone(), b.clone()])
}

impl Value {
    /// Left fold of `values` onto `start`: `((start + v0) + v1) + ...`.
    ///
    /// `start` is the first operand of the first sum, so a neuron computes
    /// `b + w0*x0 + w1*x1 + ...` with the bias at the root of the chain.
    pub fn sum_with<'a, I>(start: &Value, values: I) -> Value
    where
        I: IntoIterator<Item = &'a Value>,
    {
        values
            .into_iter()
            .fold(start.clone(), |acc, value| add_op(&acc, value))
    }
}

/// Chains `Add` nodes from the first item on. An empty iterator yields a leaf
/// holding 0.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(mut iter: I) -> Value {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, value| add_op(&acc, &value)),
            None => Value::new(0.0),
        }
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(mut iter: I) -> Value {
        match iter.next() {
            Some(first) => Value::sum_with(first, iter),
            None => Value::new(0.0),
        }
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
