//! Info command

use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use waypoint_core::error::Result;
use waypoint_core::format::{edge_record, node_record, records_header, OutputFormat};

/// Execute the info command
pub fn execute(cli: &Cli, map: &LoadedMap) -> Result<()> {
    let info = map.planner.graph_info();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Human => {
            println!("Map: {}", map.name());
            println!(
                "Streets: {}",
                if info.directed { "one-way" } else { "two-way" }
            );
            println!("Nodes: {}", info.node_count);
            println!("Edges: {}", info.edge_count);
            if !cli.quiet {
                println!();
                let arrow = if info.directed { "->" } else { "--" };
                for edge in &info.edges {
                    println!("  {} {} {} ({})", edge.from, arrow, edge.to, edge.weight);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    &map.name(),
                    "info",
                    &[
                        ("directed", info.directed.to_string()),
                        ("nodes", info.node_count.to_string()),
                        ("edges", info.edge_count.to_string()),
                    ]
                )
            );
            for (index, node) in info.nodes.iter().enumerate() {
                println!("{}", node_record(index, node));
            }
            for edge in &info.edges {
                println!("{}", edge_record(&edge.from, &edge.to, edge.weight));
            }
        }
    }

    Ok(())
}
