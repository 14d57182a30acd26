//! Shared graphs for unit tests

use crate::graph::LabeledGraph;

/// Undirected {A, B, C, D} with A-B(2), A-C(1), B-C(3), C-D(4), inserted in
/// that order so adjacency-list order is deterministic
pub fn sample_graph() -> LabeledGraph<&'static str> {
    let mut graph = LabeledGraph::new(false);
    for label in ["A", "B", "C", "D"] {
        graph.add_node(label);
    }
    graph.add_edge(&"A", &"B", 2.0);
    graph.add_edge(&"A", &"C", 1.0);
    graph.add_edge(&"B", &"C", 3.0);
    graph.add_edge(&"C", &"D", 4.0);
    graph
}

/// Undirected chain over `labels` with unit weights
pub fn line_graph(labels: &[&'static str]) -> LabeledGraph<&'static str> {
    let mut graph = LabeledGraph::new(false);
    for label in labels {
        graph.add_node(*label);
    }
    for pair in labels.windows(2) {
        graph.add_edge_default(&pair[0], &pair[1]);
    }
    graph
}
