use crate::error::GradletError;
use crate::value::Value;
use std::fmt;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Parameters are returned as handles to the module's own leaf values, so
/// reading their gradients or zeroing them acts on the module itself.
pub trait Module: fmt::Debug + fmt::Display {
    /// Performs a forward pass, building a fresh graph from `input`.
    ///
    /// # Errors
    /// `GradletError::InputSizeMismatch` if `input` does not have the width
    /// the module expects.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError>;

    /// Returns every learnable leaf of the module, including those of
    /// sub-modules, in a stable order.
    fn parameters(&self) -> Vec<Value>;

    /// Same as [`parameters`](Module::parameters), each paired with a dotted
    /// path such as `"layer1.neuron0.weight2"`.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Returns the direct child modules.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Resets the gradient of every parameter to 0.
    ///
    /// Required before each fresh backward pass; gradients accumulate
    /// otherwise.
    fn zero_grad(&self) {
        crate::autograd::zero_grad(&self.parameters());
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
