//! Map configuration for waypoint
//!
//! A map is a TOML file listing locations and the streets between them:
//!
//! ```toml
//! directed = false
//! nodes = ["Home", "Park"]
//!
//! [[edges]]
//! from = "Home"
//! to = "Park"
//! weight = 2
//! ```

pub mod global;
pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::bail_map;
use crate::error::{Result, WaypointError};
use crate::graph::LabeledGraph;

pub use global::{resolve_map_source, MapSource, CONFIG_DIR_ENV_VAR, MAP_ENV_VAR};
pub use types::{EdgeConfig, MapConfig, MAP_FORMAT_VERSION, SAMPLE_LOCATIONS, SAMPLE_STREETS};

impl MapConfig {
    /// Load a map from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            WaypointError::Other(format!("failed to read map {}: {}", path.display(), e))
        })?;
        let config: MapConfig = toml::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            nodes = config.nodes.len(),
            edges = config.edges.len(),
            "map loaded"
        );
        Ok(config)
    }

    /// Load the map a [`MapSource`] points at
    pub fn load_from(source: &MapSource) -> Result<Self> {
        match source {
            MapSource::Explicit(path) | MapSource::ConfigDir(path) => Self::load(path),
            MapSource::Builtin => Ok(Self::default()),
        }
    }

    /// Check the map describes a graph the router can use.
    ///
    /// Location names must be non-blank, unpadded and unique. Every street
    /// must join declared locations, and distances must be finite and
    /// positive (a zero distance would read as "no street"). Request names are
    /// trimmed before lookup, so a padded name could never be routed to.
    pub fn validate(&self) -> Result<()> {
        if self.version > MAP_FORMAT_VERSION {
            bail_map!(
                "unsupported map version {} (newest supported: {})",
                self.version,
                MAP_FORMAT_VERSION
            );
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if node.trim().is_empty() {
                bail_map!("location names must not be blank");
            }
            if node.trim() != node {
                bail_map!("location name {:?} has leading or trailing whitespace", node);
            }
            if !seen.insert(node.as_str()) {
                bail_map!("duplicate location: {}", node);
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if endpoint.trim() != endpoint {
                    bail_map!(
                        "street {:?} -> {:?} has a padded endpoint",
                        edge.from,
                        edge.to
                    );
                }
                if !seen.contains(endpoint.as_str()) {
                    bail_map!(
                        "street {} -> {} references unknown location: {}",
                        edge.from,
                        edge.to,
                        endpoint
                    );
                }
            }
            if !edge.weight.is_finite() || edge.weight <= 0.0 {
                bail_map!(
                    "street {} -> {} has invalid distance {} (must be positive)",
                    edge.from,
                    edge.to,
                    edge.weight
                );
            }
        }

        Ok(())
    }

    /// Validate and build the graph described by this map
    pub fn build_graph(&self) -> Result<LabeledGraph<String>> {
        self.validate()?;

        let mut graph = LabeledGraph::new(self.directed);
        for node in &self.nodes {
            graph.add_node(node.clone());
        }
        for edge in &self.edges {
            if !graph.add_edge(&edge.from, &edge.to, edge.weight) {
                return Err(WaypointError::not_found("location", &edge.from));
            }
        }
        Ok(graph)
    }
}
