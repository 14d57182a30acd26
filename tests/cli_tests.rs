//! Integration tests for the waypoint CLI
//!
//! These tests run the waypoint binary against the built-in sample city and
//! small map files written to temporary directories.

mod support;

use predicates::prelude::*;
use tempfile::tempdir;

use support::{stderr_json, stdout_json, waypoint, write_map};

const ONE_WAY_MAP: &str = r#"
directed = true
nodes = ["A", "B", "C"]

[[edges]]
from = "A"
to = "B"
weight = 2

[[edges]]
from = "B"
to = "C"
weight = 3
"#;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    waypoint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waypoint"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("nodes"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_version_flag() {
    waypoint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("waypoint"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    waypoint()
        .assert()
        .success()
        .stdout(predicate::str::contains("waypoint --help"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    waypoint()
        .args(["--format", "yaml", "nodes"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_algorithm_exit_code_2() {
    waypoint()
        .args(["path", "Home", "Park", "--algorithm", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn test_missing_route_argument_json_envelope() {
    let output = waypoint()
        .args(["--format", "json", "route", "Home"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "usage_error");
}

// ============================================================================
// route
// ============================================================================

#[test]
fn test_route_human() {
    waypoint()
        .args(["route", "Home", "Pizzeria", "University"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Home -> Pizzeria -> Market -> University",
        ))
        .stdout(predicate::str::contains("Total distance: 10"));
}

#[test]
fn test_route_json_success() {
    let output = waypoint()
        .args(["--format", "json", "route", "Home", "Park", "School"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(
        json["full_path"],
        serde_json::json!(["Home", "Park", "School"])
    );
    assert_eq!(json["origin_to_pickup"], serde_json::json!(["Home", "Park"]));
    assert_eq!(
        json["pickup_to_destination"],
        serde_json::json!(["Park", "School"])
    );
    assert_eq!(json["total_distance"], 5.0);
}

#[test]
fn test_route_trims_names() {
    waypoint()
        .args(["route", " Home ", "Pizzeria", "Market "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: Home -> Pizzeria -> Market"));
}

#[test]
fn test_route_unknown_location_json() {
    let output = waypoint()
        .args(["--format", "json", "route", "Home", "Pizzeria", "Airport"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let body = stdout_json(&output);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "unknown location: Airport");

    let err = stderr_json(&output);
    assert_eq!(err["error"]["type"], "unknown_location");
    assert_eq!(err["error"]["label"], "Airport");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_route_unknown_location_human() {
    waypoint()
        .args(["route", "Moon", "Pizzeria", "Home"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: unknown location: Moon"));
}

#[test]
fn test_route_blank_field_is_usage_error() {
    waypoint()
        .args(["route", "Home", "  ", "Market"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("all fields are required"));
}

#[test]
fn test_route_no_path_names_leg() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.toml", ONE_WAY_MAP);

    let output = waypoint()
        .arg("--map")
        .arg(&map)
        .args(["--format", "json", "route", "C", "A", "B"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err = stderr_json(&output);
    assert_eq!(err["error"]["type"], "no_path");
    assert_eq!(err["error"]["leg"], "origin_to_pickup");
    assert_eq!(err["error"]["from"], "C");
    assert_eq!(err["error"]["to"], "A");
}

#[test]
fn test_route_records() {
    waypoint()
        .args(["--format", "records", "route", "Home", "Park", "School"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"H waypoint=1 records=1 map="builtin" mode=route hops=2 total_distance=5"#,
        ))
        .stdout(predicate::str::contains(r#"N 1 "Park" leg=origin_to_pickup"#))
        .stdout(predicate::str::contains(
            r#"N 2 "School" leg=pickup_to_destination"#,
        ));
}

// ============================================================================
// nodes / info / show
// ============================================================================

#[test]
fn test_nodes_json() {
    let output = waypoint()
        .args(["--format", "json", "nodes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 10);
    assert_eq!(nodes[0], "Home");
    assert_eq!(nodes[9], "University");
}

#[test]
fn test_nodes_records_header() {
    waypoint()
        .args(["--format", "records", "nodes"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"H waypoint=1 records=1 map="builtin" mode=nodes nodes=10"#,
        ))
        .stdout(predicate::str::contains(r#"N 0 "Home""#));
}

#[test]
fn test_info_json() {
    let output = waypoint()
        .args(["--format", "json", "info"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["node_count"], 10);
    assert_eq!(json["edge_count"], 15);
    assert_eq!(json["edges"].as_array().unwrap().len(), 15);
    assert_eq!(json["edges"][0]["from"], "Home");
    assert_eq!(json["edges"][0]["to"], "Pizzeria");
    assert_eq!(json["edges"][0]["weight"], 3.0);
}

#[test]
fn test_info_human() {
    waypoint()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 10"))
        .stdout(predicate::str::contains("Edges: 15"))
        .stdout(predicate::str::contains("Home -- Park (2)"));
}

#[test]
fn test_directed_flag_doubles_edges() {
    let output = waypoint()
        .args(["--directed", "--format", "json", "info"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["directed"], true);
    assert_eq!(json["edge_count"], 30);
}

#[test]
fn test_directed_flag_keeps_streets_two_way() {
    waypoint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("existing streets stay two-way"));

    // Every street becomes a pair of one-way streets, so routes are unchanged
    waypoint()
        .args(["--directed", "route", "University", "Market", "Home"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: University -> Market -> Pizzeria -> Home",
        ))
        .stdout(predicate::str::contains("Total distance: 10"));
}

#[test]
fn test_show_human_tables() {
    waypoint()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Undirected graph"))
        .stdout(predicate::str::contains("Node count: 10"))
        .stdout(predicate::str::contains("Adjacency matrix:"))
        .stdout(predicate::str::contains("Adjacency list:"))
        .stdout(predicate::str::contains("  Home: [(Pizzeria, 3), (Office, 5), (Park, 2)]"));
}

#[test]
fn test_show_json_matrix() {
    let output = waypoint()
        .args(["--format", "json", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let matrix = json["adjacency_matrix"].as_array().unwrap();
    assert_eq!(matrix.len(), 10);
    // Home -> Park, symmetric
    assert_eq!(matrix[0][3], 2.0);
    assert_eq!(matrix[3][0], 2.0);
    assert_eq!(json["adjacency_list"][0]["node"], "Home");
}

// ============================================================================
// path / traverse
// ============================================================================

#[test]
fn test_path_dijkstra_default() {
    let output = waypoint()
        .args(["--format", "json", "path", "Home", "University"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(
        json["path"],
        serde_json::json!(["Home", "Pizzeria", "Market", "University"])
    );
    assert_eq!(json["distance"], 10.0);
    assert_eq!(json["hops"], 3);
}

#[test]
fn test_path_bfs_minimizes_hops() {
    let output = waypoint()
        .args([
            "--format",
            "json",
            "path",
            "Home",
            "University",
            "--algorithm",
            "bfs",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["hops"], 3);
    assert!(json["distance"].as_f64().unwrap() >= 10.0);
}

#[test]
fn test_path_dfs_variants_agree() {
    let iterative = waypoint()
        .args(["path", "Home", "Stadium", "--algorithm", "dfs"])
        .output()
        .unwrap();
    let recursive = waypoint()
        .args(["path", "Home", "Stadium", "--algorithm", "dfs-recursive"])
        .output()
        .unwrap();
    assert!(iterative.status.success());
    let first = |out: &std::process::Output| {
        String::from_utf8_lossy(&out.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    };
    assert_eq!(first(&iterative), first(&recursive));
}

#[test]
fn test_path_unknown_location() {
    waypoint()
        .args(["path", "Home", "Airport"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("location not found: Airport"));
}

#[test]
fn test_path_unreachable_on_one_way_map() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.toml", ONE_WAY_MAP);

    waypoint()
        .arg("--map")
        .arg(&map)
        .args(["path", "C", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path not found: C -> A"));

    waypoint()
        .arg("--map")
        .arg(&map)
        .args(["path", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"));
}

#[test]
fn test_traverse_bfs_order() {
    waypoint()
        .args(["traverse", "Home"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Home -> Pizzeria -> Office -> Park"));
}

#[test]
fn test_traverse_dijkstra_distances() {
    let output = waypoint()
        .args([
            "--format",
            "json",
            "traverse",
            "Home",
            "--algorithm",
            "dijkstra",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let distances = json["distances"].as_array().unwrap();
    assert_eq!(distances.len(), 10);
    assert_eq!(distances[0]["node"], "Home");
    assert_eq!(distances[0]["distance"], 0.0);
    assert_eq!(distances[9]["node"], "University");
    assert_eq!(distances[9]["distance"], 10.0);
}

#[test]
fn test_traverse_reports_unreachable() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.toml", ONE_WAY_MAP);

    waypoint()
        .arg("--map")
        .arg(&map)
        .args(["traverse", "B", "--algorithm", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: unreachable"))
        .stdout(predicate::str::contains("C: 3"));
}

// ============================================================================
// map resolution
// ============================================================================

#[test]
fn test_map_flag_missing_file() {
    let dir = tempdir().unwrap();
    let output = waypoint()
        .arg("--map")
        .arg(dir.path().join("missing.toml"))
        .args(["--format", "json", "nodes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["type"], "map_not_found");
}

#[test]
fn test_map_env_var() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "city.toml", ONE_WAY_MAP);

    waypoint()
        .env("WAYPOINT_MAP", &map)
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::eq("A\nB\nC\n"));
}

#[test]
fn test_config_dir_map() {
    let dir = tempdir().unwrap();
    write_map(dir.path(), "map.toml", ONE_WAY_MAP);

    waypoint()
        .env("WAYPOINT_CONFIG_DIR", dir.path())
        .args(["--format", "records", "nodes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=nodes nodes=3"));
}

#[test]
fn test_padded_location_rejected() {
    let dir = tempdir().unwrap();
    let map = write_map(
        dir.path(),
        "map.toml",
        r#"
nodes = ["Home", " Park "]

[[edges]]
from = "Home"
to = " Park "
"#,
    );

    waypoint()
        .arg("--map")
        .arg(&map)
        .args(["route", "Home", " Park ", "Home"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("leading or trailing whitespace"));
}

#[test]
fn test_records_header_quotes_map_path() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "one way.toml", ONE_WAY_MAP);

    waypoint()
        .arg("--map")
        .arg(&map)
        .args(["--format", "records", "nodes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "map=\"{}\" mode=nodes nodes=3",
            map.display()
        )));
}

#[test]
fn test_invalid_map_rejected() {
    let dir = tempdir().unwrap();
    let map = write_map(
        dir.path(),
        "map.toml",
        r#"
nodes = ["A", "B"]

[[edges]]
from = "A"
to = "B"
weight = 0
"#,
    );

    let output = waypoint()
        .arg("--map")
        .arg(&map)
        .args(["--format", "json", "info"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["type"], "invalid_map");
}

#[test]
fn test_malformed_map_is_failure() {
    let dir = tempdir().unwrap();
    let map = write_map(dir.path(), "map.toml", "nodes = [");

    waypoint()
        .arg("--map")
        .arg(&map)
        .arg("nodes")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

// ============================================================================
// logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr() {
    waypoint()
        .args(["--verbose", "nodes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolve_map"))
        .stdout(predicate::str::contains("Home"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = waypoint()
        .args(["--log-level", "debug", "--log-json", "nodes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}

#[test]
fn test_quiet_suppresses_error_text() {
    waypoint()
        .args(["--quiet", "route", "Moon", "Home", "Park"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
