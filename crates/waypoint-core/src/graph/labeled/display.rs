//! Text rendering of a labeled graph

use std::fmt::{self, Write};

use super::LabeledGraph;
use crate::graph::types::Label;

impl<L: Label + fmt::Display> LabeledGraph<L> {
    /// Render the adjacency matrix as a table with labeled rows and columns
    pub fn matrix_table(&self) -> String {
        let mut out = String::from("Adjacency matrix:\n    ");
        for label in self.nodes() {
            let _ = write!(out, "{:>5}", label.to_string());
        }
        out.push('\n');

        for (label, row) in self.nodes().iter().zip(self.matrix.iter()) {
            let _ = write!(out, "{:<4}", format!("{}:", label));
            for weight in row {
                let _ = write!(out, "{:>5}", weight);
            }
            out.push('\n');
        }
        out
    }

    /// Render the adjacency list, one sorted line per label
    pub fn list_table(&self) -> String {
        let mut labels: Vec<&L> = self.nodes().iter().collect();
        labels.sort();

        let mut out = String::from("Adjacency list:\n");
        for label in labels {
            let neighbors = self
                .neighbor_slice(label)
                .iter()
                .map(|(neighbor, weight)| format!("({}, {})", neighbor, weight))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  {}: [{}]", label, neighbors);
        }
        out
    }
}

impl<L: Label + fmt::Display> fmt::Display for LabeledGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.directed {
            "Directed"
        } else {
            "Undirected"
        };
        writeln!(f, "{} graph", mode)?;

        let labels = self
            .nodes()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Nodes: [{}]", labels)?;
        writeln!(f, "Node count: {}", self.node_count())?;
        writeln!(f, "Edges:")?;
        for (from, to, weight) in self.get_edges() {
            writeln!(f, "  {} --{}--> {}", from, weight, to)?;
        }
        Ok(())
    }
}
