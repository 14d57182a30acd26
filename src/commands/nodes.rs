//! Nodes command

use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use waypoint_core::error::Result;
use waypoint_core::format::{node_record, records_header, OutputFormat};

/// Execute the nodes command
pub fn execute(cli: &Cli, map: &LoadedMap) -> Result<()> {
    let nodes = map.planner.available_locations();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "nodes": nodes });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if nodes.is_empty() {
                if !cli.quiet {
                    println!("No locations found");
                }
            } else {
                for node in &nodes {
                    println!("{}", node);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(&map.name(), "nodes", &[("nodes", nodes.len().to_string())])
            );
            for (index, node) in nodes.iter().enumerate() {
                println!("{}", node_record(index, node));
            }
        }
    }

    Ok(())
}
