// src/value/autograd.rs

use crate::autograd::graph::build_topo;
use crate::value::Value;

impl Value {
    /// Returns the gradient accumulated so far.
    ///
    /// For a node that was not reachable from the root of the last backward
    /// pass this is whatever it held before (0 for a fresh node).
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `contribution` to the gradient. Never overwrites.
    pub(crate) fn acc_grad(&self, contribution: f64) {
        self.write_data().grad += contribution;
    }

    /// Computes the gradient of this node w.r.t. every node it depends on.
    ///
    /// The ancestry is sorted topologically, this node's gradient is seeded to
    /// 1, then each node's local rule runs once in reverse order, so a node
    /// has received every downstream contribution before it propagates.
    ///
    /// Gradients accumulate: calling `backward` again without
    /// [`zero_grad`](crate::autograd::zero_grad) adds on top of the previous
    /// results (the root itself is re-seeded to 1).
    pub fn backward(&self) {
        let topo = build_topo(self);
        if topo.len() == 1 {
            log::debug!("backward() called on a leaf value. Only the seed gradient is set.");
        } else {
            log::debug!("backward() over {} nodes", topo.len());
        }

        self.set_grad(1.0);
        for node in topo.iter().rev() {
            // The guard on `node` stays alive while its operands are mutated;
            // the DAG has no self-loops so those are always other cells.
            let guard = node.read_data();
            guard.op.backward(guard.data, guard.grad, &guard.operands);
        }
    }

    /// Resets this node's gradient to 0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}
