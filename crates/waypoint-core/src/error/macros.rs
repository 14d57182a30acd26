//! Error macros for waypoint

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WaypointError::usage($msg))
    };
}

/// Macro for rejecting a map file that fails validation
#[macro_export]
macro_rules! bail_map {
    ($($arg:tt)*) => {
        return Err($crate::error::WaypointError::invalid_map(format!($($arg)*)))
    };
}
