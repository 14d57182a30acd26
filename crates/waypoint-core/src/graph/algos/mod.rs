//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal and fewest-hops paths
//! - `dfs`: Depth-first traversal, iterative and recursive
//! - `dijkstra`: Weighted shortest paths
//! - `path`: Predecessor-chain path reconstruction

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod path;

pub use bfs::{bfs_find_path, bfs_traverse};
pub use dfs::{
    dfs_find_path, dfs_outcomes, dfs_recursive_find_path, dfs_recursive_traverse, dfs_traverse,
    DfsOutcome,
};
pub use dijkstra::{dijkstra_distances, dijkstra_find_path, HeapEntry};
pub use path::reconstruct_path;
