//! Labeled graph and path-finding operations
//!
//! Provides the graph structure and the algorithms that run over it:
//! - `LabeledGraph` with synchronized adjacency matrix and list
//! - BFS, DFS (iterative and recursive) and Dijkstra
//! - Graph provider trait the algorithms are written against

pub mod algos;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod labeled;
pub mod traversal;
pub mod types;

pub use algos::{
    bfs_find_path, bfs_traverse, dfs_find_path, dfs_recursive_find_path, dfs_recursive_traverse,
    dfs_traverse, dijkstra_distances, dijkstra_find_path,
};
pub use labeled::LabeledGraph;
pub use traversal::GraphProvider;
pub use types::{Algorithm, EdgeRecord, Label, Weight, DEFAULT_WEIGHT, NO_EDGE};
