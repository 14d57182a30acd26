//! Error types and exit codes for waypoint
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, blank location names)
//! - 3: Map/route error (invalid map file, unknown location, no path)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::route::RouteError;

/// Exit codes for the waypoint CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Map or route error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypoint operations
#[derive(Error, Debug)]
pub enum WaypointError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Map/route errors (exit code 3)
    #[error("map file not found: {path:?}")]
    MapNotFound { path: PathBuf },

    #[error("invalid map: {reason}")]
    InvalidMap { reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error(transparent)]
    Route(#[from] RouteError<String>),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WaypointError {
    /// Create a usage error (bad flags or arguments)
    pub fn usage(message: impl Into<String>) -> Self {
        WaypointError::UsageError(message.into())
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WaypointError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a map file that failed validation
    pub fn invalid_map(reason: impl Into<String>) -> Self {
        WaypointError::InvalidMap {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypointError::UnknownFormat(_) | WaypointError::UsageError(_) => ExitCode::Usage,

            WaypointError::MapNotFound { .. }
            | WaypointError::InvalidMap { .. }
            | WaypointError::NotFound { .. }
            | WaypointError::Route(_) => ExitCode::Data,

            WaypointError::Io(_)
            | WaypointError::Json(_)
            | WaypointError::Toml(_)
            | WaypointError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypointError::UnknownFormat(_) => "unknown_format",
            WaypointError::UsageError(_) => "usage_error",
            WaypointError::MapNotFound { .. } => "map_not_found",
            WaypointError::InvalidMap { .. } => "invalid_map",
            WaypointError::NotFound { .. } => "not_found",
            WaypointError::Route(RouteError::UnknownLocation { .. }) => "unknown_location",
            WaypointError::Route(RouteError::NoPath { .. }) => "no_path",
            WaypointError::Io(_) => "io_error",
            WaypointError::Json(_) => "json_error",
            WaypointError::Toml(_) => "toml_error",
            WaypointError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            WaypointError::Route(RouteError::UnknownLocation { label }) => {
                error_obj["label"] = serde_json::json!(label);
            }
            WaypointError::Route(RouteError::NoPath { leg, from, to }) => {
                error_obj["leg"] = serde_json::json!(leg);
                error_obj["from"] = serde_json::json!(from);
                error_obj["to"] = serde_json::json!(to);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;
