use crate::graph::types::{Label, Weight};
use crate::graph::LabeledGraph;

/// Trait for providing graph adjacency to the traversal algorithms
pub trait GraphProvider<L: Label> {
    /// Whether `label` is a node of the graph
    fn contains(&self, label: &L) -> bool;

    /// Neighbors of `label` in adjacency-list order; empty for unknown labels
    fn neighbors(&self, label: &L) -> &[(L, Weight)];

    /// All labels in index order
    fn labels(&self) -> &[L];
}

impl<L: Label> GraphProvider<L> for LabeledGraph<L> {
    fn contains(&self, label: &L) -> bool {
        LabeledGraph::contains(self, label)
    }

    fn neighbors(&self, label: &L) -> &[(L, Weight)] {
        self.neighbor_slice(label)
    }

    fn labels(&self) -> &[L] {
        self.nodes()
    }
}
