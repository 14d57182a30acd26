//! Output format handling for waypoint
//!
//! Three output formats are supported:
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented `H`/`N`/`E`/`P` records for scripts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WaypointError;

/// Version tag written into every records header
pub const RECORDS_VERSION: u32 = 1;

/// Output format for waypoint commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = WaypointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(WaypointError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape a value for a quoted records field.
///
/// Backslashes are doubled before quotes are escaped, so `\"` inside a field
/// always means a literal quote.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// Wrap a value in quotes for a records field
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}

/// Format a records header line.
///
/// The map name is quoted since it is usually a file path. `fields` are
/// appended as `key=value` pairs after the mode.
pub fn records_header(map: &str, mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!(
        "H waypoint=1 records={} map={} mode={}",
        RECORDS_VERSION,
        quoted(map),
        mode
    );
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format a node record: `N <index> "<label>"`
pub fn node_record(index: usize, label: &str) -> String {
    format!("N {} {}", index, quoted(label))
}

/// Format an edge record: `E "<from>" "<to>" <weight>`
pub fn edge_record(from: &str, to: &str, weight: f64) -> String {
    format!("E {} {} {}", quoted(from), quoted(to), weight)
}
