//! CLI argument parsing for waypoint
//!
//! Global flags: --map, --format, --directed, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_algorithm, parse_format};
use waypoint_core::format::OutputFormat;
use waypoint_core::graph::Algorithm;

/// Waypoint - delivery route planner
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Map file (TOML); falls back to WAYPOINT_MAP, the config dir, then the sample city
    #[arg(long, global = true, value_name = "PATH")]
    pub map: Option<PathBuf>,

    /// Output format: human, json or records
    #[arg(long, global = true, value_name = "FORMAT", value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Switch the graph to directed mode; existing streets stay two-way
    /// (each becomes a pair of one-way streets)
    #[arg(long, global = true)]
    pub directed: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (a level like `trace`, or a full directive)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan a delivery route: origin -> pickup -> destination
    Route {
        /// Starting location
        origin: String,
        /// Where the order is collected
        pickup: String,
        /// Where the order is delivered
        destination: String,
    },

    /// List available locations
    Nodes,

    /// Show node and edge counts with the street list
    Info,

    /// Find a path between two locations
    Path {
        /// Start location
        from: String,
        /// Target location
        to: String,
        /// Search algorithm: bfs, dfs, dfs-recursive or dijkstra
        #[arg(long, short, value_parser = parse_algorithm, default_value = "dijkstra")]
        algorithm: Algorithm,
    },

    /// Visit every location reachable from a start
    Traverse {
        /// Start location
        start: String,
        /// bfs, dfs and dfs-recursive print visit order; dijkstra prints distances
        #[arg(long, short, value_parser = parse_algorithm, default_value = "bfs")]
        algorithm: Algorithm,
    },

    /// Print the graph with its adjacency matrix and list
    Show,
}
