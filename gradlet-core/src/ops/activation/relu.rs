use crate::autograd::Op;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, x)`.
///
/// Backward: the gradient passes through unchanged when the output is
/// positive, and is blocked otherwise (including at exactly 0).
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    let out = if x < 0.0 { 0.0 } else { x };
    Value::from_op(out, Op::Relu, vec![input.clone()])
}

impl Value {
    /// `max(0, self)`; see [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
