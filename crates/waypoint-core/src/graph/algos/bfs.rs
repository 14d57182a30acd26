use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::Label;
use crate::graph::{GraphProvider, LabeledGraph};
use std::collections::{HashMap, HashSet, VecDeque};

/// Outcome of a breadth-first search
struct BfsSearch<L> {
    order: Vec<L>,
    predecessors: HashMap<L, L>,
    found: bool,
}

fn bfs_search<L: Label>(
    provider: &dyn GraphProvider<L>,
    start: &L,
    target: Option<&L>,
) -> BfsSearch<L> {
    let mut visited: HashSet<L> = HashSet::new();
    let mut predecessors: HashMap<L, L> = HashMap::new();
    let mut queue: VecDeque<L> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());

        if target == Some(&current) {
            return BfsSearch {
                order,
                predecessors,
                found: true,
            };
        }

        for (neighbor, _) in provider.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                predecessors.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor.clone());
            }
        }
    }

    BfsSearch {
        order,
        predecessors,
        found: false,
    }
}

/// Breadth-first visitation order from `start`.
///
/// Neighbors are explored in adjacency-list order. Empty if `start` is unknown.
#[tracing::instrument(level = "debug", skip(provider))]
pub fn bfs_traverse<L: Label>(provider: &dyn GraphProvider<L>, start: &L) -> Vec<L> {
    if !provider.contains(start) {
        return Vec::new();
    }
    bfs_search(provider, start, None).order
}

/// Fewest-hops path from `start` to `target`.
///
/// The search stops as soon as `target` is dequeued. `None` if either label
/// is unknown or `target` is unreachable.
#[tracing::instrument(level = "debug", skip(provider))]
pub fn bfs_find_path<L: Label>(
    provider: &dyn GraphProvider<L>,
    start: &L,
    target: &L,
) -> Option<Vec<L>> {
    if !provider.contains(start) || !provider.contains(target) {
        return None;
    }

    let search = bfs_search(provider, start, Some(target));
    if !search.found {
        tracing::debug!(visited = search.order.len(), "bfs target unreachable");
        return None;
    }
    reconstruct_path(start, target, &search.predecessors)
}

impl<L: Label> LabeledGraph<L> {
    /// See [`bfs_traverse`]
    pub fn bfs(&self, start: &L) -> Vec<L> {
        bfs_traverse(self, start)
    }

    /// See [`bfs_find_path`]
    pub fn bfs_path(&self, start: &L, target: &L) -> Option<Vec<L>> {
        bfs_find_path(self, start, target)
    }
}
