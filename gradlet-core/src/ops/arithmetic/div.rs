// gradlet-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul::mul_op, pow::powf};
use crate::value::Value;

/// Division, built as `a * b**-1`.
///
/// Dividing by a zero-valued node gives IEEE infinities or NaN; nothing is
/// intercepted.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &powf(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
