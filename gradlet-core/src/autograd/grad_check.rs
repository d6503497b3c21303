use crate::error::GradletError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradletError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input must be a leaf value. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
}

impl From<GradletError> for GradCheckError {
    fn from(err: GradletError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` must build its output from `inputs` each time it is called; the
/// inputs are perturbed in place (`x ± epsilon`) between calls and restored
/// afterwards. Input gradients are zeroed before the analytical pass and hold
/// the analytical gradients when this returns.
///
/// Analytical and numerical gradients match when they are within
/// `tolerance`, absolutely or relative to the larger of the two.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, GradletError>,
{
    // --- Initial Checks ---
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    // --- 1. Analytical gradients ---
    crate::autograd::zero_grad(inputs);
    let output = func(inputs)?;
    output.backward();
    let analytical_grads: Vec<f64> = inputs.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients ---
    for (i, input) in inputs.iter().enumerate() {
        let original = input.data();

        let loss_plus = evaluate_at(&func, inputs, input, original + epsilon);
        let loss_minus = evaluate_at(&func, inputs, input, original - epsilon);
        input
            .set_data(original)
            .map_err(|_| GradCheckError::InputNotLeaf { input_index: i })?;
        let (loss_plus, loss_minus) = (loss_plus?, loss_minus?);

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        let analytical_grad = analytical_grads[i];
        log::trace!(
            "check_grad input {}: analytical={} numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Sets `probe` to `at`, re-runs `func` and returns the output's data.
fn evaluate_at<F>(func: &F, inputs: &[Value], probe: &Value, at: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, GradletError>,
{
    probe
        .set_data(at)
        .map_err(GradCheckError::ForwardPassError)?;
    Ok(func(inputs)?.data())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
