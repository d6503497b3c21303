// gradlet-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::value::Value;

/// Multiplies two values: `out = a * b`.
///
/// Backward (product rule): `a.grad += b.data * out.grad` and
/// `b.grad += a.data * out.grad`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Op::Mul, vec![a.clone(), b.clone()])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
