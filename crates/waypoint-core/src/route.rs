//! Three-point routing: origin → pickup → destination
//!
//! Each leg is an independent Dijkstra query. The two legs are joined at the
//! pickup, which appears exactly once in the full path.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::graph::types::{Label, Weight};
use crate::graph::LabeledGraph;

/// One of the two sub-journeys of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Leg {
    OriginToPickup,
    PickupToDestination,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::OriginToPickup => f.write_str("origin -> pickup"),
            Leg::PickupToDestination => f.write_str("pickup -> destination"),
        }
    }
}

/// Structured routing failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError<L> {
    #[error("unknown location: {label}")]
    UnknownLocation { label: L },

    #[error("no path from {from} to {to} ({leg})")]
    NoPath { leg: Leg, from: L, to: L },
}

/// A successful three-point route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<L> {
    pub full_path: Vec<L>,
    pub origin_to_pickup: Vec<L>,
    pub pickup_to_destination: Vec<L>,
    pub total_distance: Weight,
}

impl<L: Label> LabeledGraph<L> {
    /// Plan a route from `origin` through `pickup` to `destination`.
    ///
    /// Labels are validated in origin, pickup, destination order; the first
    /// unknown one is reported. The total distance is summed from matrix
    /// weights along the full path.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn route(
        &self,
        origin: &L,
        pickup: &L,
        destination: &L,
    ) -> Result<Route<L>, RouteError<L>> {
        for label in [origin, pickup, destination] {
            if !self.contains(label) {
                return Err(RouteError::UnknownLocation {
                    label: label.clone(),
                });
            }
        }

        let origin_to_pickup =
            self.dijkstra_path(origin, pickup)
                .ok_or_else(|| RouteError::NoPath {
                    leg: Leg::OriginToPickup,
                    from: origin.clone(),
                    to: pickup.clone(),
                })?;
        let pickup_to_destination =
            self.dijkstra_path(pickup, destination)
                .ok_or_else(|| RouteError::NoPath {
                    leg: Leg::PickupToDestination,
                    from: pickup.clone(),
                    to: destination.clone(),
                })?;

        let mut full_path = origin_to_pickup.clone();
        full_path.extend(pickup_to_destination.iter().skip(1).cloned());

        let total_distance: Weight = full_path
            .windows(2)
            .filter_map(|step| self.get_edge_weight(&step[0], &step[1]))
            .sum();

        tracing::debug!(
            hops = full_path.len().saturating_sub(1),
            total_distance,
            "route planned"
        );

        Ok(Route {
            full_path,
            origin_to_pickup,
            pickup_to_destination,
            total_distance,
        })
    }
}
