//! Show command

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use waypoint_core::error::Result;
use waypoint_core::format::{edge_record, node_record, records_header, OutputFormat};
use waypoint_core::graph::Weight;

#[derive(Debug, Serialize)]
struct Neighbor<'a> {
    to: &'a str,
    weight: Weight,
}

#[derive(Debug, Serialize)]
struct AdjacencyEntry<'a> {
    node: &'a str,
    neighbors: Vec<Neighbor<'a>>,
}

/// Execute the show command
pub fn execute(cli: &Cli, map: &LoadedMap) -> Result<()> {
    let graph = map.planner.graph();

    match cli.format {
        OutputFormat::Json => {
            let list = graph.adjacency_list();
            let adjacency: Vec<AdjacencyEntry> = list
                .iter()
                .map(|(node, neighbors)| AdjacencyEntry {
                    node: node.as_str(),
                    neighbors: neighbors
                        .iter()
                        .map(|(to, weight)| Neighbor {
                            to: to.as_str(),
                            weight: *weight,
                        })
                        .collect(),
                })
                .collect();
            let output = serde_json::json!({
                "directed": graph.is_directed(),
                "nodes": graph.nodes(),
                "adjacency_matrix": graph.adjacency_matrix(),
                "adjacency_list": adjacency,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print!("{}", graph);
            if !cli.quiet {
                println!();
                print!("{}", graph.matrix_table());
                println!();
                print!("{}", graph.list_table());
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    &map.name(),
                    "show",
                    &[
                        ("directed", graph.is_directed().to_string()),
                        ("nodes", graph.node_count().to_string()),
                        ("edges", graph.edge_count().to_string()),
                    ]
                )
            );
            for (index, node) in graph.nodes().iter().enumerate() {
                println!("{}", node_record(index, node));
            }
            for (from, to, weight) in graph.get_edges() {
                println!("{}", edge_record(&from, &to, weight));
            }
        }
    }

    Ok(())
}
