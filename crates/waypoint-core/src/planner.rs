//! Delivery route planner
//!
//! `RoutePlanner` is the application state handed to request handlers. It owns
//! one graph, built once at startup from a map, and answers the three queries
//! the front end needs: available locations, graph summary and routes.

use serde::Serialize;
use std::time::Instant;

use crate::bail_usage;
use crate::config::MapConfig;
use crate::error::Result;
use crate::graph::types::EdgeRecord;
use crate::graph::LabeledGraph;
use crate::route::{Route, RouteError};
use crate::trace_time;

/// A validated route request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: String,
    pub pickup: String,
    pub destination: String,
}

impl RouteRequest {
    /// Build a request, trimming each name. Blank names are a usage error.
    pub fn new(origin: &str, pickup: &str, destination: &str) -> Result<Self> {
        let (origin, pickup, destination) = (origin.trim(), pickup.trim(), destination.trim());
        if origin.is_empty() || pickup.is_empty() || destination.is_empty() {
            bail_usage!("all fields are required (origin, pickup, destination)");
        }
        Ok(Self {
            origin: origin.to_string(),
            pickup: pickup.to_string(),
            destination: destination.to_string(),
        })
    }
}

/// Node and edge summary of the loaded map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphInfo {
    pub directed: bool,
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeRecord<String>>,
}

/// Application state: the city graph plus the queries run against it
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    graph: LabeledGraph<String>,
}

impl RoutePlanner {
    /// Build a planner from a map, validating it first
    pub fn from_config(config: &MapConfig) -> Result<Self> {
        let start = Instant::now();
        let graph = config.build_graph()?;
        trace_time!(start, "build_graph", nodes = graph.node_count());
        Ok(Self { graph })
    }

    /// Planner over the built-in sample city
    pub fn sample() -> Result<Self> {
        Self::from_config(&MapConfig::default())
    }

    /// Wrap an existing graph
    pub fn from_graph(graph: LabeledGraph<String>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &LabeledGraph<String> {
        &self.graph
    }

    /// Switch the loaded map between one-way and two-way streets
    pub fn set_directed(&mut self, directed: bool) {
        self.graph.set_directed(directed);
    }

    /// Location names in map order
    pub fn available_locations(&self) -> Vec<String> {
        self.graph.nodes().to_vec()
    }

    pub fn graph_info(&self) -> GraphInfo {
        let edges: Vec<EdgeRecord<String>> = self
            .graph
            .get_edges()
            .into_iter()
            .map(EdgeRecord::from)
            .collect();
        GraphInfo {
            directed: self.graph.is_directed(),
            node_count: self.graph.node_count(),
            edge_count: edges.len(),
            nodes: self.available_locations(),
            edges,
        }
    }

    /// Plan an origin → pickup → destination route
    #[tracing::instrument(skip(self, request), fields(origin = %request.origin, pickup = %request.pickup, destination = %request.destination))]
    pub fn plan(
        &self,
        request: &RouteRequest,
    ) -> std::result::Result<Route<String>, RouteError<String>> {
        self.graph
            .route(&request.origin, &request.pickup, &request.destination)
    }
}

/// JSON payload for a route response, success or failure
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RouteResponse {
    Found {
        success: bool,
        #[serde(flatten)]
        route: Route<String>,
    },
    Failed {
        success: bool,
        error: String,
    },
}

impl From<std::result::Result<Route<String>, RouteError<String>>> for RouteResponse {
    fn from(result: std::result::Result<Route<String>, RouteError<String>>) -> Self {
        match result {
            Ok(route) => RouteResponse::Found {
                success: true,
                route,
            },
            Err(err) => RouteResponse::Failed {
                success: false,
                error: err.to_string(),
            },
        }
    }
}
