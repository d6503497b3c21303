use gradlet_core::autograd::grad_check::{check_grad, GradCheckError};
use gradlet_core::{GradletError, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Shared tolerances for finite-difference checks.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-6;
#[allow(dead_code)]
pub const TOLERANCE: f64 = 1e-4;

// Deterministic RNG so network tests see the same weights on every run.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// Runs `check_grad` with the shared tolerances.
#[allow(dead_code)]
pub fn assert_grads_match<F>(func: F, inputs: &[Value]) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, GradletError>,
{
    check_grad(func, inputs, EPSILON, TOLERANCE)
}
