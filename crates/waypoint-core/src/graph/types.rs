use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Weight of a single edge.
///
/// A weight of [`NO_EDGE`] in the adjacency matrix means the edge is absent,
/// so zero-weight edges cannot be represented.
pub type Weight = f64;

/// Matrix sentinel for "no edge"
pub const NO_EDGE: Weight = 0.0;

/// Weight used by [`crate::graph::LabeledGraph::add_edge_default`]
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Requirements on a node label.
///
/// `Ord` is only used to emit each undirected edge once in
/// [`crate::graph::LabeledGraph::get_edges`].
pub trait Label: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Label for T {}

/// Edge in serialized graph output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord<L> {
    pub from: L,
    pub to: L,
    pub weight: Weight,
}

impl<L> From<(L, L, Weight)> for EdgeRecord<L> {
    fn from((from, to, weight): (L, L, Weight)) -> Self {
        EdgeRecord { from, to, weight }
    }
}

/// Traversal algorithm selector shared by the CLI and planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    DfsRecursive,
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::DfsRecursive => "dfs-recursive",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dfs-recursive" | "dfs_recursive" => Ok(Algorithm::DfsRecursive),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(format!(
                "unknown algorithm '{}' (expected: bfs, dfs, dfs-recursive, dijkstra)",
                other
            )),
        }
    }
}
