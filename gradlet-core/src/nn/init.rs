// src/nn/init.rs
// Parameter initialisation: every function returns fresh leaf values.

use crate::error::GradletError;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Draws `n` leaves from the uniform distribution on `[low, high]`.
///
/// # Errors
/// `GradletError::InvalidArgument` if a bound is not finite or `low > high`.
pub fn uniform<R: Rng + ?Sized>(
    n: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Vec<Value>, GradletError> {
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(GradletError::InvalidArgument(format!(
            "uniform init requires finite bounds with low <= high, got [{}, {}]",
            low, high
        )));
    }
    let dist = Uniform::new_inclusive(low, high);
    Ok(sample(n, &dist, rng))
}

/// Draws `n` leaves from the normal distribution `N(mean, std²)`.
///
/// # Errors
/// `GradletError::InvalidArgument` if `mean` is not finite or `std` is
/// negative or not finite.
pub fn normal<R: Rng + ?Sized>(
    n: usize,
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<Vec<Value>, GradletError> {
    if !mean.is_finite() || !std.is_finite() || std < 0.0 {
        return Err(GradletError::InvalidArgument(format!(
            "normal init requires a finite mean and a finite std >= 0, got mean={} std={}",
            mean, std
        )));
    }
    let dist = Normal::new(mean, std)
        .map_err(|e| GradletError::InvalidArgument(format!("normal init: {}", e)))?;
    Ok(sample(n, &dist, rng))
}

/// `n` leaves all holding `value`.
pub fn constant(n: usize, value: f64) -> Vec<Value> {
    (0..n).map(|_| Value::new(value)).collect()
}

pub fn zeros(n: usize) -> Vec<Value> {
    constant(n, 0.0)
}

pub(crate) fn sample<D, R>(n: usize, dist: &D, rng: &mut R) -> Vec<Value>
where
    D: Distribution<f64>,
    R: Rng + ?Sized,
{
    (0..n).map(|_| Value::new(dist.sample(rng))).collect()
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
