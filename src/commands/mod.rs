//! CLI commands for waypoint

pub mod dispatch;
pub mod info;
pub mod nodes;
pub mod path;
pub mod route;
pub mod show;
pub mod traverse;
