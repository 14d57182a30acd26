//! Traverse command

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use crate::commands::path::require_location;
use waypoint_core::error::Result;
use waypoint_core::format::{node_record, quoted, records_header, OutputFormat};
use waypoint_core::graph::{Algorithm, Weight};

/// Shortest distance from the start; `None` when unreachable
#[derive(Debug, Serialize)]
pub struct DistanceEntry {
    pub node: String,
    pub distance: Option<Weight>,
}

/// Execute the traverse command
pub fn execute(cli: &Cli, map: &LoadedMap, start: &str, algorithm: Algorithm) -> Result<()> {
    let graph = map.planner.graph();
    let start = require_location(graph, start)?;

    let order = match algorithm {
        Algorithm::Bfs => graph.bfs(&start),
        Algorithm::Dfs => graph.dfs(&start),
        Algorithm::DfsRecursive => graph.dfs_recursive(&start),
        Algorithm::Dijkstra => {
            let distances = graph.dijkstra(&start);
            let entries: Vec<DistanceEntry> = graph
                .nodes()
                .iter()
                .map(|node| DistanceEntry {
                    node: node.clone(),
                    distance: distances.get(node).copied().filter(|d| d.is_finite()),
                })
                .collect();
            output_distances(cli, map, &start, &entries)?;
            return Ok(());
        }
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "algorithm": algorithm,
                "order": order,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", order.join(" -> "));
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    &map.name(),
                    "traverse",
                    &[
                        ("start", quoted(&start)),
                        ("algorithm", algorithm.to_string()),
                        ("visited", order.len().to_string()),
                    ]
                )
            );
            for (index, label) in order.iter().enumerate() {
                println!("{}", node_record(index, label));
            }
        }
    }

    Ok(())
}

fn output_distances(
    cli: &Cli,
    map: &LoadedMap,
    start: &str,
    entries: &[DistanceEntry],
) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "algorithm": Algorithm::Dijkstra,
                "distances": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for entry in entries {
                match entry.distance {
                    Some(distance) => println!("{}: {}", entry.node, distance),
                    None => println!("{}: unreachable", entry.node),
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    &map.name(),
                    "distances",
                    &[("start", quoted(start))]
                )
            );
            for (index, entry) in entries.iter().enumerate() {
                let distance = entry
                    .distance
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("{} distance={}", node_record(index, &entry.node), distance);
            }
        }
    }
    Ok(())
}
