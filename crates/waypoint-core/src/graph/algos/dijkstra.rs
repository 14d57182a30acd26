use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{Label, Weight, NO_EDGE};
use crate::graph::{GraphProvider, LabeledGraph};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance).
///
/// Entries with equal distance pop in insertion order.
#[derive(Debug, Clone)]
pub struct HeapEntry<L> {
    pub node: L,
    pub distance: Weight,
    pub seq: usize,
}

impl<L> PartialEq for HeapEntry<L> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<L> Eq for HeapEntry<L> {}

impl<L> PartialOrd for HeapEntry<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L> Ord for HeapEntry<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during a Dijkstra search
struct DijkstraState<L> {
    distances: HashMap<L, Weight>,
    previous: HashMap<L, L>,
    heap: BinaryHeap<Reverse<HeapEntry<L>>>,
    next_seq: usize,
}

impl<L: Label> DijkstraState<L> {
    fn new(labels: &[L], start: &L) -> Self {
        let mut distances: HashMap<L, Weight> = labels
            .iter()
            .map(|label| (label.clone(), Weight::INFINITY))
            .collect();
        distances.insert(start.clone(), 0.0);

        let mut state = Self {
            distances,
            previous: HashMap::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        };
        state.push(start.clone(), 0.0);
        state
    }

    fn push(&mut self, node: L, distance: Weight) {
        self.heap.push(Reverse(HeapEntry {
            node,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn distance(&self, node: &L) -> Weight {
        self.distances.get(node).copied().unwrap_or(Weight::INFINITY)
    }
}

/// Run Dijkstra from `start`, stopping early when `target` is popped.
/// Returns whether the target was reached.
fn dijkstra_search<L: Label>(
    provider: &dyn GraphProvider<L>,
    state: &mut DijkstraState<L>,
    target: Option<&L>,
) -> bool {
    while let Some(Reverse(HeapEntry { node, distance, .. })) = state.heap.pop() {
        // Stale entry: a shorter distance was recorded after this push
        if distance > state.distance(&node) {
            continue;
        }

        if target == Some(&node) {
            return true;
        }

        for (neighbor, weight) in provider.neighbors(&node) {
            let candidate = distance + weight;
            if candidate < state.distance(neighbor) {
                state.distances.insert(neighbor.clone(), candidate);
                state.previous.insert(neighbor.clone(), node.clone());
                state.push(neighbor.clone(), candidate);
            }
        }
    }

    false
}

/// Shortest distance from `start` to every node.
///
/// Unreachable nodes map to `f64::INFINITY`. Empty if `start` is unknown.
/// Edge weights must be non-negative.
#[tracing::instrument(level = "debug", skip(provider))]
pub fn dijkstra_distances<L: Label>(
    provider: &dyn GraphProvider<L>,
    start: &L,
) -> HashMap<L, Weight> {
    if !provider.contains(start) {
        return HashMap::new();
    }

    let mut state = DijkstraState::new(provider.labels(), start);
    dijkstra_search(provider, &mut state, None);
    state.distances
}

/// Minimum-weight path from `start` to `target`.
///
/// Returns as soon as `target` is popped from the frontier. `None` if either
/// label is unknown or `target` is unreachable. Edge weights must be
/// non-negative.
#[tracing::instrument(level = "debug", skip(provider))]
pub fn dijkstra_find_path<L: Label>(
    provider: &dyn GraphProvider<L>,
    start: &L,
    target: &L,
) -> Option<Vec<L>> {
    if !provider.contains(start) || !provider.contains(target) {
        return None;
    }

    let mut state = DijkstraState::new(provider.labels(), start);
    if !dijkstra_search(provider, &mut state, Some(target)) {
        tracing::debug!("dijkstra target unreachable");
        return None;
    }
    reconstruct_path(start, target, &state.previous)
}

impl<L: Label> LabeledGraph<L> {
    /// See [`dijkstra_distances`]
    pub fn dijkstra(&self, start: &L) -> HashMap<L, Weight> {
        dijkstra_distances(self, start)
    }

    /// See [`dijkstra_find_path`]
    pub fn dijkstra_path(&self, start: &L, target: &L) -> Option<Vec<L>> {
        dijkstra_find_path(self, start, target)
    }

    /// Sum of matrix weights along consecutive nodes of `path`.
    ///
    /// `None` if any step is not an edge of the graph. An empty or
    /// single-node path weighs 0.
    pub fn path_weight(&self, path: &[L]) -> Option<Weight> {
        path.windows(2).try_fold(0.0, |total, step| {
            self.get_edge_weight(&step[0], &step[1])
                .filter(|weight| *weight != NO_EDGE)
                .map(|weight| total + weight)
        })
    }
}
