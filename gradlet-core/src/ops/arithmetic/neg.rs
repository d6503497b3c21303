// gradlet-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;

/// Negation, built as `a * (-1)` with the constant in a fresh leaf.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}
