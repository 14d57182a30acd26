use waypoint_core::format::OutputFormat;
use waypoint_core::graph::Algorithm;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse search algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>()
}
