//! Command dispatch logic for waypoint

use std::time::Instant;

use crate::cli::Cli;
use waypoint_core::error::Result;

mod macros;
mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};
pub use command::LoadedMap;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
