//! Waypoint Core Library
//!
//! Core domain logic for the Waypoint delivery route planner: a labeled
//! graph with BFS, DFS and Dijkstra, three-point routing on top of it, and
//! the map configuration it is loaded from.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod planner;
pub mod route;
