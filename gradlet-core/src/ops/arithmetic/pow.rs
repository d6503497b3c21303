// gradlet-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::error::GradletError;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Raises `base` to a fixed exponent: `out = base ** exponent`.
///
/// The exponent is a plain number known when the graph is built, never a
/// node. Backward: `base.grad += k * base.data ** (k - 1) * out.grad`.
///
/// # Errors
/// `GradletError::InvalidExponent` if `exponent` does not convert to `f64`
/// or is NaN or infinite. Nothing is added to the graph in that case.
pub fn pow_op<E>(base: &Value, exponent: E) -> Result<Value, GradletError>
where
    E: ToPrimitive + Debug,
{
    let k = exponent
        .to_f64()
        .filter(|k| k.is_finite())
        .ok_or_else(|| GradletError::InvalidExponent(format!("{:?}", exponent)))?;
    Ok(powf(base, k))
}

/// Unchecked power for exponents the crate itself guarantees to be finite.
pub(crate) fn powf(base: &Value, exponent: f64) -> Value {
    Value::from_op(base.data().powf(exponent), Op::Pow(exponent), vec![base.clone()])
}

impl Value {
    /// `self ** exponent`; see [`pow_op`].
    pub fn pow<E>(&self, exponent: E) -> Result<Value, GradletError>
    where
        E: ToPrimitive + Debug,
    {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
