use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a node: the address of its shared cell.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Builds a topological sort of the graph ending at `root`.
///
/// Every node appears exactly once and after all of its operands; `root` is
/// last. Nodes are deduplicated by identity, not by value, so shared
/// subexpressions are visited once.
///
/// The depth-first post-order walk uses an explicit stack, so long chains
/// (e.g. a sum over many terms) do not grow the call stack.
pub fn build_topo(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, operands already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        let node_id = node.node_id();
        if !visited.insert(node_id) {
            continue;
        }
        log::trace!("[build_topo] Visiting node {:?} ({:?})", node_id, node.op());

        let operands = node.operands();
        stack.push((node, true));
        // Reversed so the first operand is finished first.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }
    sorted_list
}
