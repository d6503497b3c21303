use crate::error::GradletError;
use crate::nn::activation::Activation;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `nout` neurons reading the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    pub fn new(nin: usize, nout: usize, activation: Activation) -> Result<Self, GradletError> {
        Self::with_rng(nin, nout, activation, &mut rand::thread_rng())
    }

    /// Creates a layer drawing every neuron's weights from `rng`, in order.
    ///
    /// # Errors
    /// `GradletError::InvalidArgument` if `nout` is 0.
    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, GradletError> {
        if nout == 0 {
            return Err(GradletError::InvalidArgument(
                "Layer requires at least one output neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::with_rng(nin, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError> {
        if input.len() != self.nin {
            return Err(GradletError::InputSizeMismatch {
                expected: self.nin,
                actual: input.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.call(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (j, neuron) in self.neurons.iter().enumerate() {
            for (param_name, value) in neuron.named_parameters() {
                params.push((format!("neuron{}.{}", j, param_name), value));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of [")?;
        for (i, neuron) in self.neurons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neuron)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
