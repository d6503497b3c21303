// src/value/create.rs

use crate::value::Value;

/// Wraps every number in a fresh leaf, e.g. one network input sample.
pub fn from_vec(data: Vec<f64>) -> Vec<Value> {
    data.into_iter().map(Value::new).collect()
}

/// Same as [`from_vec`] for a borrowed slice.
pub fn from_slice(data: &[f64]) -> Vec<Value> {
    data.iter().copied().map(Value::new).collect()
}
