//! Labeled graph with synchronized adjacency matrix and adjacency list
//!
//! Every node label maps to a dense index in `[0, node_count)`. The matrix is
//! addressed by index and answers edge lookups in O(1); the list is keyed by
//! label and drives neighbor iteration for the traversal algorithms. Both
//! representations are private and only change through the mutation API
//! below, which keeps them in agreement.
//!
//! One documented exception: calling [`LabeledGraph::add_edge`] again for an
//! edge that is already listed overwrites the matrix weight but leaves the
//! list entry untouched. Use [`LabeledGraph::set_edge_weight`] to change a
//! weight in both views.

mod display;

use std::collections::HashMap;
use tracing::debug;

use crate::graph::types::{Label, Weight, DEFAULT_WEIGHT, NO_EDGE};

/// Mutable graph keyed by arbitrary labels
#[derive(Debug, Clone)]
pub struct LabeledGraph<L> {
    directed: bool,
    label_index: HashMap<L, usize>,
    index_label: Vec<L>,
    matrix: Vec<Vec<Weight>>,
    adjacency: HashMap<L, Vec<(L, Weight)>>,
}

impl<L: Label> Default for LabeledGraph<L> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<L: Label> LabeledGraph<L> {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            label_index: HashMap::new(),
            index_label: Vec::new(),
            matrix: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.index_label.len()
    }

    /// Labels in index order
    pub fn nodes(&self) -> &[L] {
        &self.index_label
    }

    pub fn contains(&self, label: &L) -> bool {
        self.label_index.contains_key(label)
    }

    /// Current dense index of `label`
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.label_index.get(label).copied()
    }

    // ===== Nodes =====

    /// Add a node. Returns false if the label is already present.
    pub fn add_node(&mut self, label: L) -> bool {
        if self.label_index.contains_key(&label) {
            return false;
        }

        let index = self.index_label.len();
        for row in &mut self.matrix {
            row.push(NO_EDGE);
        }
        self.matrix.push(vec![NO_EDGE; index + 1]);

        debug!(node = ?label, index, "add_node");
        self.label_index.insert(label.clone(), index);
        self.adjacency.insert(label.clone(), Vec::new());
        self.index_label.push(label);
        true
    }

    /// Remove a node and every edge touching it.
    ///
    /// All labels with a higher index shift down by one.
    /// Returns false if the label is absent.
    pub fn remove_node(&mut self, label: &L) -> bool {
        let Some(index) = self.label_index.remove(label) else {
            return false;
        };

        self.index_label.remove(index);
        for (i, shifted) in self.index_label.iter().enumerate().skip(index) {
            if let Some(slot) = self.label_index.get_mut(shifted) {
                *slot = i;
            }
        }

        self.matrix.remove(index);
        for row in &mut self.matrix {
            row.remove(index);
        }

        self.adjacency.remove(label);
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|(neighbor, _)| neighbor != label);
        }

        debug!(node = ?label, index, "remove_node");
        true
    }

    // ===== Edges =====

    /// Add an edge with weight 1
    pub fn add_edge_default(&mut self, from: &L, to: &L) -> bool {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Add an edge. Returns false if either endpoint is missing.
    ///
    /// The matrix weight is always overwritten, but an endpoint that already
    /// lists the other keeps its original list weight.
    pub fn add_edge(&mut self, from: &L, to: &L, weight: Weight) -> bool {
        let Some((a, b)) = self.endpoints(from, to) else {
            return false;
        };

        self.write_matrix(a, b, weight);
        self.list_insert(from, to, weight);
        if !self.directed {
            self.list_insert(to, from, weight);
        }

        debug!(from = ?from, to = ?to, weight, "add_edge");
        true
    }

    /// Remove an edge. Returns false only if either endpoint is missing;
    /// the edge itself need not exist.
    pub fn remove_edge(&mut self, from: &L, to: &L) -> bool {
        let Some((a, b)) = self.endpoints(from, to) else {
            return false;
        };

        self.write_matrix(a, b, NO_EDGE);
        self.list_remove(from, to);
        if !self.directed {
            self.list_remove(to, from);
        }

        debug!(from = ?from, to = ?to, "remove_edge");
        true
    }

    /// Set the weight of an edge in both the matrix and the list.
    ///
    /// A weight of zero removes the edge; a missing list entry is appended.
    /// Returns false if either endpoint is missing.
    pub fn set_edge_weight(&mut self, from: &L, to: &L, weight: Weight) -> bool {
        if weight == NO_EDGE {
            return self.remove_edge(from, to);
        }

        let Some((a, b)) = self.endpoints(from, to) else {
            return false;
        };

        self.write_matrix(a, b, weight);
        self.list_upsert(from, to, weight);
        if !self.directed {
            self.list_upsert(to, from, weight);
        }

        debug!(from = ?from, to = ?to, weight, "set_edge_weight");
        true
    }

    /// Switch between directed and undirected mode.
    ///
    /// The adjacency list is regenerated from the matrix in index order, which
    /// discards any list drift left by repeated `add_edge` calls. Switching to
    /// undirected first mirrors one-way matrix cells so the matrix is
    /// symmetric again.
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
        if !directed {
            self.symmetrize_matrix();
        }
        self.rebuild_adjacency();
        debug!(directed, nodes = self.node_count(), "set_directed");
    }

    // ===== Queries =====

    /// All edges as `(from, to, weight)` triples, read from the adjacency list.
    ///
    /// Undirected edges are emitted once, from the smaller label.
    pub fn get_edges(&self) -> Vec<(L, L, Weight)> {
        let mut edges = Vec::new();
        for from in &self.index_label {
            for (to, weight) in self.neighbor_slice(from) {
                if self.directed || from < to {
                    edges.push((from.clone(), to.clone(), *weight));
                }
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.get_edges().len()
    }

    /// Neighbors of `label` with their list weights; empty for unknown labels
    pub fn get_neighbors(&self, label: &L) -> Vec<(L, Weight)> {
        self.neighbor_slice(label).to_vec()
    }

    /// Number of adjacency-list entries for `label`; 0 for unknown labels
    pub fn get_degree(&self, label: &L) -> usize {
        self.neighbor_slice(label).len()
    }

    pub fn has_edge(&self, from: &L, to: &L) -> bool {
        self.endpoints(from, to)
            .is_some_and(|(a, b)| self.matrix[a][b] != NO_EDGE)
    }

    /// Matrix weight between two nodes.
    ///
    /// `None` if either label is unknown, `Some(0.0)` if both exist but are
    /// not connected.
    pub fn get_edge_weight(&self, from: &L, to: &L) -> Option<Weight> {
        self.endpoints(from, to).map(|(a, b)| self.matrix[a][b])
    }

    /// Owned copy of the adjacency matrix, rows and columns in index order
    pub fn adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        self.matrix.clone()
    }

    /// Owned copy of the adjacency list, in index order
    pub fn adjacency_list(&self) -> Vec<(L, Vec<(L, Weight)>)> {
        self.index_label
            .iter()
            .map(|label| (label.clone(), self.get_neighbors(label)))
            .collect()
    }

    pub(crate) fn neighbor_slice(&self, label: &L) -> &[(L, Weight)] {
        self.adjacency.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    // ===== Internals =====

    fn endpoints(&self, from: &L, to: &L) -> Option<(usize, usize)> {
        Some((*self.label_index.get(from)?, *self.label_index.get(to)?))
    }

    fn write_matrix(&mut self, a: usize, b: usize, weight: Weight) {
        self.matrix[a][b] = weight;
        if !self.directed {
            self.matrix[b][a] = weight;
        }
    }

    fn list_insert(&mut self, from: &L, to: &L, weight: Weight) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            if !neighbors.iter().any(|(neighbor, _)| neighbor == to) {
                neighbors.push((to.clone(), weight));
            }
        }
    }

    fn list_upsert(&mut self, from: &L, to: &L, weight: Weight) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            match neighbors.iter_mut().find(|(neighbor, _)| neighbor == to) {
                Some(entry) => entry.1 = weight,
                None => neighbors.push((to.clone(), weight)),
            }
        }
    }

    fn list_remove(&mut self, from: &L, to: &L) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.retain(|(neighbor, _)| neighbor != to);
        }
    }

    fn symmetrize_matrix(&mut self) {
        let n = self.matrix.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.matrix[i][j] == NO_EDGE {
                    self.matrix[i][j] = self.matrix[j][i];
                } else {
                    self.matrix[j][i] = self.matrix[i][j];
                }
            }
        }
    }

    fn rebuild_adjacency(&mut self) {
        let mut adjacency = HashMap::with_capacity(self.index_label.len());
        for (i, from) in self.index_label.iter().enumerate() {
            let neighbors: Vec<(L, Weight)> = self
                .index_label
                .iter()
                .enumerate()
                .filter(|(j, _)| self.matrix[i][*j] != NO_EDGE)
                .map(|(j, to)| (to.clone(), self.matrix[i][j]))
                .collect();
            adjacency.insert(from.clone(), neighbors);
        }
        self.adjacency = adjacency;
    }
}
