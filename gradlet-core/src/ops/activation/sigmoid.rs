use crate::autograd::Op;
use crate::value::Value;

/// Applies the logistic sigmoid: `1 / (1 + exp(-x))`.
///
/// Backward: `input.grad += out * (1 - out) * out.grad`, using the forward
/// output already stored on the node.
pub fn sigmoid_op(input: &Value) -> Value {
    let out = 1.0 / (1.0 + (-input.data()).exp());
    Value::from_op(out, Op::Sigmoid, vec![input.clone()])
}

impl Value {
    /// Logistic sigmoid; see [`sigmoid_op`].
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}
