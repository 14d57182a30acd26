//! Path command

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use waypoint_core::error::{Result, WaypointError};
use waypoint_core::format::{node_record, records_header, OutputFormat};
use waypoint_core::graph::{Algorithm, LabeledGraph, Weight};

/// A path found between two locations
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub algorithm: Algorithm,
    pub path: Vec<String>,
    pub hops: usize,
    pub distance: Weight,
}

/// Ensure a location exists on the map
pub fn require_location(graph: &LabeledGraph<String>, label: &str) -> Result<String> {
    let label = label.trim().to_string();
    if !graph.contains(&label) {
        return Err(WaypointError::not_found("location", &label));
    }
    Ok(label)
}

fn find_path(
    graph: &LabeledGraph<String>,
    from: &String,
    to: &String,
    algorithm: Algorithm,
) -> Option<Vec<String>> {
    match algorithm {
        Algorithm::Bfs => graph.bfs_path(from, to),
        Algorithm::Dfs => graph.dfs_path(from, to),
        Algorithm::DfsRecursive => graph.dfs_recursive_path(from, to),
        Algorithm::Dijkstra => graph.dijkstra_path(from, to),
    }
}

/// Execute the path command
pub fn execute(cli: &Cli, map: &LoadedMap, from: &str, to: &str, algorithm: Algorithm) -> Result<()> {
    let graph = map.planner.graph();
    let from = require_location(graph, from)?;
    let to = require_location(graph, to)?;

    let path = find_path(graph, &from, &to, algorithm)
        .ok_or_else(|| WaypointError::not_found("path", format!("{} -> {}", from, to)))?;
    let distance = graph.path_weight(&path).ok_or_else(|| {
        WaypointError::Other(format!("path {} is not a walk", path.join(" -> ")))
    })?;

    let result = PathResult {
        hops: path.len().saturating_sub(1),
        from,
        to,
        algorithm,
        path,
        distance,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            println!("{}", result.path.join(" -> "));
            if !cli.quiet {
                println!(
                    "{} hop(s), distance {} ({})",
                    result.hops, result.distance, result.algorithm
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    &map.name(),
                    "path",
                    &[
                        ("algorithm", result.algorithm.to_string()),
                        ("hops", result.hops.to_string()),
                        ("distance", result.distance.to_string()),
                    ]
                )
            );
            for (index, label) in result.path.iter().enumerate() {
                println!("{}", node_record(index, label));
            }
        }
    }

    Ok(())
}
