use crate::error::GradletError;
use crate::nn::activation::Activation;
use crate::nn::init;
use crate::nn::module::Module;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single unit computing `act(b + Σ wᵢ·xᵢ)`.
///
/// Weights are drawn from `Uniform(-1, 1)` and the bias starts at 0.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs, initialised from `rand::thread_rng()`.
    pub fn new(nin: usize, activation: Activation) -> Result<Self, GradletError> {
        Self::with_rng(nin, activation, &mut rand::thread_rng())
    }

    /// Creates a neuron with `nin` inputs, drawing its weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, GradletError> {
        let weights = init::uniform(nin, -1.0, 1.0, rng)?;
        Ok(Neuron {
            weights,
            bias: Value::new(0.0),
            activation,
        })
    }

    /// Builds a neuron around existing leaves.
    ///
    /// # Errors
    /// `GradletError::InvalidArgument` if a weight or the bias is a computed
    /// node; parameters must be leaves to be updated in place.
    pub fn from_parameters(
        weights: Vec<Value>,
        bias: Value,
        activation: Activation,
    ) -> Result<Self, GradletError> {
        if !bias.is_leaf() || weights.iter().any(|w| !w.is_leaf()) {
            return Err(GradletError::InvalidArgument(
                "neuron parameters must be leaves".to_string(),
            ));
        }
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Evaluates the neuron on `input` and returns its single output.
    ///
    /// The bias is the first operand of the weighted sum.
    pub fn call(&self, input: &[Value]) -> Result<Value, GradletError> {
        if input.len() != self.weights.len() {
            return Err(GradletError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "Neuron::call".to_string(),
            });
        }
        let products: Vec<Value> = self
            .weights
            .iter()
            .zip(input)
            .map(|(w, x)| mul_op(w, x))
            .collect();
        let pre_activation = Value::sum_with(&self.bias, &products);
        Ok(self.activation.apply(&pre_activation))
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Number of inputs.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError> {
        Ok(vec![self.call(input)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(k, w)| (format!("weight{}", k), w.clone()))
            .collect();
        params.push(("bias".to_string(), self.bias.clone()));
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Neuron({})", self.activation, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
