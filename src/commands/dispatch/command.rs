//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use waypoint_core::config::{resolve_map_source, MapConfig, MapSource};
use waypoint_core::error::Result;
use waypoint_core::planner::RoutePlanner;

use super::macros::trace_command;

/// A planner together with a description of the map it was built from
pub struct LoadedMap {
    pub planner: RoutePlanner,
    pub source: MapSource,
}

impl LoadedMap {
    /// Map name used in records headers
    pub fn name(&self) -> String {
        self.source.describe()
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Resolve, load and build the active map
    pub fn load_map(&self) -> Result<LoadedMap> {
        let source = resolve_map_source(self.cli.map.as_deref())?;
        tracing::debug!(source = %source.describe(), "resolve_map");

        let config = MapConfig::load_from(&source)?;
        let mut planner = RoutePlanner::from_config(&config)?;
        if self.cli.directed {
            planner.set_directed(true);
        }
        trace_command!(self.cli, self.start, "load_map");

        Ok(LoadedMap { planner, source })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypoint {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Plans delivery routes: origin -> pickup -> destination.");
        println!();
        println!("Run `waypoint --help` for usage information.");
        Ok(())
    }
}
