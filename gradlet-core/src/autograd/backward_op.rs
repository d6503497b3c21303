use crate::value::Value;
use std::fmt;

/// The operation that produced a node, and with it the node's local
/// backward rule.
///
/// Negation, subtraction and division have no variant: they are built from
/// `Mul`, `Add` and `Pow`, so their gradients follow from these rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Created directly by the user. Propagates nothing.
    Leaf,
    Add,
    Mul,
    /// Power with an exponent fixed at graph-construction time.
    Pow(f64),
    Relu,
    Sigmoid,
}

impl Op {
    /// Number of operands a node built by this operation holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow(_) | Op::Relu | Op::Sigmoid => 1,
        }
    }

    /// Adds `d(out)/d(operand) * out_grad` to each operand's gradient.
    ///
    /// Local derivatives are computed from forward values (`out_data` and the
    /// operands' data), never from another node's gradient. Contributions are
    /// added, so an operand used twice, or by several nodes, sums them.
    pub(crate) fn backward(&self, out_data: f64, out_grad: f64, operands: &[Value]) {
        match (*self, operands) {
            (Op::Leaf, []) => {}
            (Op::Add, [a, b]) => {
                a.acc_grad(out_grad);
                b.acc_grad(out_grad);
            }
            (Op::Mul, [a, b]) => {
                let (a_data, b_data) = (a.data(), b.data());
                a.acc_grad(b_data * out_grad);
                b.acc_grad(a_data * out_grad);
            }
            // x^0 is constant; the power rule would give 0 * 0^-1 = NaN at x = 0.
            (Op::Pow(k), [_]) if k == 0.0 => {}
            (Op::Pow(k), [a]) => {
                let local = k * a.data().powf(k - 1.0);
                a.acc_grad(local * out_grad);
            }
            (Op::Relu, [a]) => {
                if out_data > 0.0 {
                    a.acc_grad(out_grad);
                }
            }
            (Op::Sigmoid, [a]) => {
                a.acc_grad(out_data * (1.0 - out_data) * out_grad);
            }
            (op, operands) => unreachable!(
                "{:?} node holds {} operands, expected {}",
                op,
                operands.len(),
                op.arity()
            ),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(k) => write!(f, "**{}", k),
            Op::Relu => write!(f, "ReLU"),
            Op::Sigmoid => write!(f, "Sigmoid"),
        }
    }
}
