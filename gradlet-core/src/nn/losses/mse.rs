// gradlet-core/src/nn/losses/mse.rs

use crate::error::GradletError;
use crate::ops::arithmetic::{mul_op, sub_op};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = GradletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(GradletError::InvalidArgument(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Mean => write!(f, "mean"),
            Reduction::Sum => write!(f, "sum"),
        }
    }
}

/// Mean squared error between predictions and targets.
///
/// The loss is an ordinary graph of `Add`/`Mul` nodes, so calling
/// `backward` on it reaches every prediction (and every target that is
/// itself a graph node).
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// `Σ (pᵢ - tᵢ)²`, divided by the number of pairs for `Reduction::Mean`.
    ///
    /// # Errors
    /// * `GradletError::InputSizeMismatch` if the slices differ in length.
    /// * `GradletError::InvalidArgument` if they are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, GradletError> {
        if predictions.len() != targets.len() {
            return Err(GradletError::InputSizeMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(GradletError::InvalidArgument(
                "MseLoss requires at least one prediction".to_string(),
            ));
        }

        let squared_errors: Vec<Value> = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| {
                let diff = sub_op(p, t);
                mul_op(&diff, &diff)
            })
            .collect();
        let total: Value = squared_errors.iter().sum();

        let loss = match self.reduction {
            Reduction::Mean => &total / predictions.len() as f64,
            Reduction::Sum => total,
        };
        log::trace!("MseLoss({}) over {} pairs = {}", self.reduction, predictions.len(), loss.data());
        Ok(loss)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
