//! Route command

use crate::cli::Cli;
use crate::commands::dispatch::LoadedMap;
use waypoint_core::error::{Result, WaypointError};
use waypoint_core::format::{node_record, records_header, OutputFormat};
use waypoint_core::planner::{RouteRequest, RouteResponse};
use waypoint_core::route::Route;

/// Execute the route command
pub fn execute(
    cli: &Cli,
    map: &LoadedMap,
    origin: &str,
    pickup: &str,
    destination: &str,
) -> Result<()> {
    let request = RouteRequest::new(origin, pickup, destination)?;
    let result = map.planner.plan(&request);

    if cli.format == OutputFormat::Json {
        let response = RouteResponse::from(result.clone());
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    let route = result.map_err(WaypointError::from)?;

    match cli.format {
        OutputFormat::Json => {}
        OutputFormat::Human => output_human(cli, &route),
        OutputFormat::Records => output_records(map, &route),
    }

    Ok(())
}

fn output_human(cli: &Cli, route: &Route<String>) {
    println!("Route: {}", route.full_path.join(" -> "));
    if !cli.quiet {
        println!("  origin -> pickup:      {}", route.origin_to_pickup.join(" -> "));
        println!(
            "  pickup -> destination: {}",
            route.pickup_to_destination.join(" -> ")
        );
    }
    println!("Total distance: {}", route.total_distance);
}

fn output_records(map: &LoadedMap, route: &Route<String>) {
    println!(
        "{}",
        records_header(
            &map.name(),
            "route",
            &[
                ("hops", route.full_path.len().saturating_sub(1).to_string()),
                ("total_distance", route.total_distance.to_string()),
            ]
        )
    );
    let pickup_index = route.origin_to_pickup.len().saturating_sub(1);
    for (index, label) in route.full_path.iter().enumerate() {
        let leg = if index <= pickup_index {
            "origin_to_pickup"
        } else {
            "pickup_to_destination"
        };
        println!("{} leg={}", node_record(index, label), leg);
    }
}
