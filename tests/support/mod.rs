use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for waypoint, isolated from the user's map and log settings
pub fn waypoint() -> Command {
    let mut cmd = cargo_bin_cmd!("waypoint");
    cmd.env_remove("WAYPOINT_MAP")
        .env_remove("WAYPOINT_LOG")
        .env_remove("RUST_LOG")
        .env(
            "WAYPOINT_CONFIG_DIR",
            std::env::temp_dir().join("waypoint-tests-no-config"),
        );
    cmd
}

/// Write a map file into `dir` and return its path
pub fn write_map(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout of a finished command as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Parse stderr of a finished command as JSON
#[allow(dead_code)]
pub fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).unwrap()
}
