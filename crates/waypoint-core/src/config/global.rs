//! Map file discovery (explicit path, environment, or ~/.config/waypoint/map.toml)

use std::path::{Path, PathBuf};

use crate::error::{Result, WaypointError};

const CONFIG_DIR: &str = "waypoint";
const MAP_FILE: &str = "map.toml";

/// Explicit map file path
pub const MAP_ENV_VAR: &str = "WAYPOINT_MAP";
/// Overrides the directory searched for `map.toml`
pub const CONFIG_DIR_ENV_VAR: &str = "WAYPOINT_CONFIG_DIR";

/// Where the active map came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    /// `--map` flag or `WAYPOINT_MAP`
    Explicit(PathBuf),
    /// `map.toml` in the user config directory
    ConfigDir(PathBuf),
    /// Built-in sample city
    Builtin,
}

impl MapSource {
    pub fn describe(&self) -> String {
        match self {
            MapSource::Explicit(path) | MapSource::ConfigDir(path) => path.display().to_string(),
            MapSource::Builtin => "builtin".to_string(),
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        return Some(PathBuf::from(env_dir));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR))
}

/// Resolve which map to load.
///
/// Order: `explicit` argument, `WAYPOINT_MAP`, `<config dir>/waypoint/map.toml`
/// if it exists, then the built-in sample. An explicit path that does not
/// exist is an error rather than a silent fallback.
pub fn resolve_map_source(explicit: Option<&Path>) -> Result<MapSource> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(MAP_ENV_VAR).map(PathBuf::from));

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(WaypointError::MapNotFound { path });
        }
        return Ok(MapSource::Explicit(path));
    }

    if let Some(path) = config_dir().map(|dir| dir.join(MAP_FILE)) {
        if path.is_file() {
            return Ok(MapSource::ConfigDir(path));
        }
    }

    Ok(MapSource::Builtin)
}
