use serde::{Deserialize, Serialize};

use crate::graph::types::{Weight, DEFAULT_WEIGHT};

/// Current map file format version
pub const MAP_FORMAT_VERSION: u32 = 1;

/// Locations of the built-in sample city
pub const SAMPLE_LOCATIONS: [&str; 10] = [
    "Home",
    "Pizzeria",
    "Office",
    "Park",
    "School",
    "Hospital",
    "Downtown",
    "Market",
    "Stadium",
    "University",
];

/// Streets of the built-in sample city with their distances
pub const SAMPLE_STREETS: [(&str, &str, Weight); 15] = [
    ("Home", "Pizzeria", 3.0),
    ("Home", "Office", 5.0),
    ("Home", "Park", 2.0),
    ("Pizzeria", "Downtown", 4.0),
    ("Pizzeria", "Market", 3.0),
    ("Office", "School", 6.0),
    ("Office", "Hospital", 4.0),
    ("Park", "School", 3.0),
    ("Park", "Stadium", 5.0),
    ("Downtown", "Hospital", 2.0),
    ("Downtown", "University", 7.0),
    ("Market", "University", 4.0),
    ("School", "Stadium", 3.0),
    ("Hospital", "University", 5.0),
    ("Stadium", "University", 6.0),
];

fn default_version() -> u32 {
    MAP_FORMAT_VERSION
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

/// A street between two locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    /// Distance; defaults to 1 when omitted
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

/// Map file contents (`map.toml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Whether streets are one-way
    #[serde(default)]
    pub directed: bool,

    /// Location names, in insertion order
    #[serde(default)]
    pub nodes: Vec<String>,

    /// Streets between declared locations
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

impl Default for MapConfig {
    /// The built-in sample city
    fn default() -> Self {
        MapConfig {
            version: MAP_FORMAT_VERSION,
            directed: false,
            nodes: SAMPLE_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            edges: SAMPLE_STREETS
                .iter()
                .map(|(from, to, weight)| EdgeConfig {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight: *weight,
                })
                .collect(),
        }
    }
}
