use crate::error::GradletError;
use crate::nn::activation::Activation;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A multilayer perceptron: layers chained so each one's outputs are the
/// next one's inputs.
///
/// With `nin = 2` and `nouts = [4, 4, 1]` the layer sizes are
/// `2 -> 4 -> 4 -> 1`. Every layer, the last one included, applies the
/// configured activation; use `Activation::Linear` for an unbounded output.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    pub fn new(nin: usize, nouts: &[usize], activation: Activation) -> Result<Self, GradletError> {
        Self::with_rng(nin, nouts, activation, &mut rand::thread_rng())
    }

    /// Builds the network drawing all weights from `rng`, layer by layer.
    ///
    /// # Errors
    /// `GradletError::InvalidArgument` if `nouts` is empty or holds a 0.
    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, GradletError> {
        if nouts.is_empty() {
            return Err(GradletError::InvalidArgument(
                "MLP requires at least one layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(nouts.len());
        let mut fan_in = nin;
        for &nout in nouts {
            layers.push(Layer::with_rng(fan_in, nout, activation, rng)?);
            fan_in = nout;
        }
        let mlp = Mlp { layers };
        log::debug!(
            "Built MLP {} -> {:?} ({} activation, {} parameters)",
            nin,
            nouts,
            activation,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    /// Runs the network and returns its single output.
    ///
    /// # Errors
    /// `GradletError::NonScalarOutput` if the last layer has more than one
    /// neuron, plus any error from [`Module::forward`].
    pub fn forward_scalar(&self, input: &[Value]) -> Result<Value, GradletError> {
        let mut outputs = self.forward(input)?;
        if outputs.len() != 1 {
            return Err(GradletError::NonScalarOutput {
                width: outputs.len(),
            });
        }
        outputs.pop().ok_or(GradletError::NonScalarOutput { width: 0 })
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradletError> {
        let mut current_input = input.to_vec();
        for layer in &self.layers {
            current_input = layer.forward(&current_input)?;
        }
        Ok(current_input)
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = Vec::new();
        for layer in &self.layers {
            params.extend(layer.parameters());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (param_name, value) in layer.named_parameters() {
                params.push((format!("layer{}.{}", i, param_name), value));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
