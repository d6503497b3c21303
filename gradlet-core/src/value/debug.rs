// src/value/debug.rs
use crate::value::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data = {}, grad = {})", guard.data, guard.grad)
    }
}

// Operands are summarised by count; printing them would walk the whole graph.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op)
            .field("operands", &guard.operands.len())
            .finish()
    }
}
