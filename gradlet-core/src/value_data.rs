// src/value_data.rs
use crate::autograd::Op;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage for a [`Value`] node.
///
/// Wrapped in `Rc<RefCell<ValueData>>` by `Value` so that one node can be the
/// operand of many downstream nodes while its gradient is still mutated in
/// place during the backward pass.
pub struct ValueData {
    /// Forward result. Fixed once the node is built, except for leaves
    /// overwritten through [`Value::set_data`].
    pub(crate) data: f64,
    /// Accumulated `d(root)/d(self)`. Starts at 0.
    pub(crate) grad: f64,
    /// Operation that produced this node; selects the local backward rule.
    pub(crate) op: Op,
    /// Operands in the order the operation received them. The same handle may
    /// appear twice (`a + a`), once per use.
    pub(crate) operands: Vec<Value>,
}

impl ValueData {
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            operands: Vec::new(),
        }
    }

    pub(crate) fn computed(data: f64, op: Op, operands: Vec<Value>) -> Self {
        debug_assert_eq!(op.arity(), operands.len(), "{op:?} built with wrong operand count");
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }
}

// Unlinks uniquely owned ancestors iteratively; the default recursive drop
// overflows the stack on long chains.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(value) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                pending.append(&mut cell.into_inner().operands);
            }
        }
    }
}
