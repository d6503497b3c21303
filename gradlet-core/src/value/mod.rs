// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::Op;
use crate::error::GradletError;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd;
pub mod create;
mod debug;

pub use create::{from_slice, from_vec};

/// A scalar node in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** the same node can feed several downstream
///     operations; cloning a `Value` clones the handle, never the node.
/// 2.  **Interior Mutability:** the gradient is accumulated in place through
///     any handle during [`Value::backward`].
///
/// `Rc` makes `Value` neither `Send` nor `Sync`: a graph lives on the thread
/// that built it.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Creates the output node of `op` applied to `operands`.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::computed(data, op, operands))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Stable identity of the node behind this handle.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the data of a leaf node, e.g. for a parameter update.
    ///
    /// Nodes downstream of the leaf are not recomputed; run the forward pass
    /// again to see the new value propagate. Calling `backward` on a graph
    /// built before the update mixes stale node data with the new leaf data,
    /// so the resulting gradients match neither graph.
    ///
    /// # Errors
    /// `GradletError::NonLeafMutation` if this node was produced by an
    /// operation.
    pub fn set_data(&self, data: f64) -> Result<(), GradletError> {
        let mut guard = self.write_data();
        if !guard.is_leaf() {
            return Err(GradletError::NonLeafMutation);
        }
        guard.data = data;
        Ok(())
    }

    /// The operation that produced this node (`Op::Leaf` for leaves).
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Operands in the order the operation received them, duplicates included.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    /// Distinct direct inputs of this node, in first-use order.
    ///
    /// `(&a + &a).predecessors()` has one element while `operands()` has two.
    pub fn predecessors(&self) -> Vec<Value> {
        let guard = self.read_data();
        let mut unique: Vec<Value> = Vec::with_capacity(guard.operands.len());
        for operand in &guard.operands {
            if !unique.iter().any(|seen| seen.ptr_eq(operand)) {
                unique.push(operand.clone());
            }
        }
        unique
    }

    /// Returns `true` if both handles point to the same node.
    ///
    /// Two distinct nodes holding equal numbers are not the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data), // Clone the Rc, not the ValueData
        }
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}
