//! # gradlet-core
//!
//! A reverse-mode automatic differentiation engine over `f64` scalars, and a
//! tiny multilayer perceptron built on top of it.
//!
//! Every operation on a [`Value`] eagerly computes its result and records its
//! operands, so an expression implicitly builds a DAG. Calling
//! [`Value::backward`] on the output walks that DAG in reverse topological
//! order and accumulates `d(output)/d(node)` into every node that contributed.
//!
//! ```
//! use gradlet_core::Value;
//!
//! let a = Value::new(3.0);
//! let b = Value::new(4.0);
//! let y = &a * &b + &a;
//! y.backward();
//! assert_eq!(a.grad(), 5.0);
//! assert_eq!(b.grad(), 3.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod value;
pub mod value_data;

pub use autograd::Op;
pub use error::GradletError;
pub use model::Mlp;
pub use nn::{Activation, Module};
pub use value::Value;
// Re-export traits required by public functions
pub use num_traits;
