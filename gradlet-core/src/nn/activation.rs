use crate::error::GradletError;
use crate::value::Value;
use std::fmt;

/// Non-linearity applied to a neuron's weighted sum.
///
/// The numeric flags `0`, `1` and `2` select `Linear`, `Relu` and `Sigmoid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// No non-linearity.
    Linear = 0,
    #[default]
    Relu = 1,
    Sigmoid = 2,
}

impl Activation {
    pub fn apply(&self, pre_activation: &Value) -> Value {
        match self {
            Activation::Linear => pre_activation.clone(),
            Activation::Relu => pre_activation.relu(),
            Activation::Sigmoid => pre_activation.sigmoid(),
        }
    }

    /// The numeric flag of this activation.
    pub fn flag(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Activation {
    type Error = GradletError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Activation::Linear),
            1 => Ok(Activation::Relu),
            2 => Ok(Activation::Sigmoid),
            other => Err(GradletError::UnknownActivation(other)),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Linear => write!(f, "Linear"),
            Activation::Relu => write!(f, "ReLU"),
            Activation::Sigmoid => write!(f, "Sigmoid"),
        }
    }
}
