//! Path reconstruction from predecessor pointers

use crate::graph::types::Label;
use std::collections::HashMap;

/// Walk predecessor pointers from `target` back to `start` and return the
/// path in start→target order.
///
/// Returns `None` if the chain breaks before reaching `start`.
pub fn reconstruct_path<L: Label>(
    start: &L,
    target: &L,
    predecessors: &HashMap<L, L>,
) -> Option<Vec<L>> {
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != start {
        let pred = predecessors.get(current)?;
        path.push(pred.clone());
        current = pred;
    }

    path.reverse();
    Some(path)
}
