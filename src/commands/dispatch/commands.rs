//! Command implementations for all waypoint commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use waypoint_core::error::Result;

use super::macros::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let map = ctx.load_map()?;

        let result = match self {
            Commands::Route {
                origin,
                pickup,
                destination,
            } => commands::route::execute(ctx.cli, &map, origin, pickup, destination),
            Commands::Nodes => commands::nodes::execute(ctx.cli, &map),
            Commands::Info => commands::info::execute(ctx.cli, &map),
            Commands::Path {
                from,
                to,
                algorithm,
            } => commands::path::execute(ctx.cli, &map, from, to, *algorithm),
            Commands::Traverse { start, algorithm } => {
                commands::traverse::execute(ctx.cli, &map, start, *algorithm)
            }
            Commands::Show => commands::show::execute(ctx.cli, &map),
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
