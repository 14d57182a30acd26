//! Depth-first search, iterative and recursive
//!
//! Both variants visit nodes in the same order and report the same target
//! path: the iterative version pushes neighbors in reverse list order and
//! marks a node visited when it is popped, so a node may sit on the stack
//! more than once.

use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::Label;
use crate::graph::{GraphProvider, LabeledGraph};
use std::collections::{HashMap, HashSet};

/// Visitation order plus the path to the target, if one was requested and found
#[derive(Debug, Clone, PartialEq)]
pub struct DfsOutcome<L> {
    pub order: Vec<L>,
    pub path: Option<Vec<L>>,
}

fn dfs_stack<L: Label>(
    provider: &dyn GraphProvider<L>,
    start: &L,
    target: Option<&L>,
) -> DfsOutcome<L> {
    let mut visited: HashSet<L> = HashSet::new();
    let mut predecessors: HashMap<L, L> = HashMap::new();
    let mut stack: Vec<(L, Option<L>)> = vec![(start.clone(), None)];
    let mut order = Vec::new();

    while let Some((current, parent)) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if let Some(parent) = parent {
            predecessors.insert(current.clone(), parent);
        }
        order.push(current.clone());

        if target == Some(&current) {
            let path = reconstruct_path(start, &current, &predecessors);
            return DfsOutcome { order, path };
        }

        for (neighbor, _) in provider.neighbors(&current).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push((neighbor.clone(), Some(current.clone())));
            }
        }
    }

    DfsOutcome { order, path: None }
}

/// Returns the path from `node` to the target in reverse order
fn dfs_visit<L: Label>(
    provider: &dyn GraphProvider<L>,
    node: &L,
    target: Option<&L>,
    visited: &mut HashSet<L>,
    order: &mut Vec<L>,
) -> Option<Vec<L>> {
    visited.insert(node.clone());
    order.push(node.clone());

    if target == Some(node) {
        return Some(vec![node.clone()]);
    }

    for (neighbor, _) in provider.neighbors(node) {
        if visited.contains(neighbor) {
            continue;
        }
        if let Some(mut reversed) = dfs_visit(provider, neighbor, target, visited, order) {
            reversed.push(node.clone());
            return Some(reversed);
        }
    }

    None
}

fn dfs_recursive_search<L: Label>(
    provider: &dyn GraphProvider<L>,
    start: &L,
    target: Option<&L>,
) -> DfsOutcome<L> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let path = dfs_visit(provider, start, target, &mut visited, &mut order).map(|mut reversed| {
        reversed.reverse();
        reversed
    });
    DfsOutcome { order, path }
}

/// Depth-first visitation order using an explicit stack.
/// Empty if `start` is unknown.
#[tracing::instrument(level = "debug", skip(provider))]
pub fn dfs_traverse<L: Label>(provider: &dyn GraphProvider<L>, start: &L) -> Vec<L> {
    if !provider.contains(start) {
        return Vec::new();
    }
    dfs_stack(provider, start, None).order
}

/// Depth-first path from `start` to `target` using an explicit stack.
/// `None` if either label is unknown or `target` is unreachable.
#[tracing::instrument(level = "debug", skip(provider))]
pub fn dfs_find_path<L: Label>(
    provider: &dyn GraphProvider<L>,
    start: &L,
    target: &L,
) -> Option<Vec<L>> {
    if !provider.contains(start) || !provider.contains(target) {
        return None;
    }
    dfs_stack(provider, start, Some(target)).path
}

/// Depth-first visitation order using recursion.
///
/// Recursion depth grows with the longest simple path explored, so very deep
/// graphs should use [`dfs_traverse`].
#[tracing::instrument(level = "debug", skip(provider))]
pub fn dfs_recursive_traverse<L: Label>(provider: &dyn GraphProvider<L>, start: &L) -> Vec<L> {
    if !provider.contains(start) {
        return Vec::new();
    }
    dfs_recursive_search(provider, start, None).order
}

/// Depth-first path from `start` to `target` using recursion
#[tracing::instrument(level = "debug", skip(provider))]
pub fn dfs_recursive_find_path<L: Label>(
    provider: &dyn GraphProvider<L>,
    start: &L,
    target: &L,
) -> Option<Vec<L>> {
    if !provider.contains(start) || !provider.contains(target) {
        return None;
    }
    dfs_recursive_search(provider, start, Some(target)).path
}

/// Run both DFS variants toward an optional target.
///
/// Exposed so callers can compare the two outcomes directly.
pub fn dfs_outcomes<L: Label>(
    provider: &dyn GraphProvider<L>,
    start: &L,
    target: Option<&L>,
) -> Option<(DfsOutcome<L>, DfsOutcome<L>)> {
    if !provider.contains(start) || target.is_some_and(|t| !provider.contains(t)) {
        return None;
    }
    Some((
        dfs_stack(provider, start, target),
        dfs_recursive_search(provider, start, target),
    ))
}

impl<L: Label> LabeledGraph<L> {
    /// See [`dfs_traverse`]
    pub fn dfs(&self, start: &L) -> Vec<L> {
        dfs_traverse(self, start)
    }

    /// See [`dfs_find_path`]
    pub fn dfs_path(&self, start: &L, target: &L) -> Option<Vec<L>> {
        dfs_find_path(self, start, target)
    }

    /// See [`dfs_recursive_traverse`]
    pub fn dfs_recursive(&self, start: &L) -> Vec<L> {
        dfs_recursive_traverse(self, start)
    }

    /// See [`dfs_recursive_find_path`]
    pub fn dfs_recursive_path(&self, start: &L, target: &L) -> Option<Vec<L>> {
        dfs_recursive_find_path(self, start, target)
    }
}
