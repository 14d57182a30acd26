//! Waypoint - delivery route planner CLI
//!
//! Plans origin → pickup → destination routes over a weighted city map and
//! exposes the underlying graph searches (BFS, DFS, Dijkstra).

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use waypoint_core::error::{ExitCode as WaypointExitCode, Result, WaypointError};
use waypoint_core::format::OutputFormat;
use waypoint_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let outcome = commands::dispatch::run(&cli, start);
    report_outcome(&cli, outcome)
}

/// Print a command failure in the requested format and pick the exit code
fn report_outcome(cli: &Cli, outcome: Result<()>) -> ExitCode {
    let Err(e) = outcome else {
        return ExitCode::from(WaypointExitCode::Success as u8);
    };

    match cli.format {
        OutputFormat::Json => eprintln!("{}", e.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", e),
    }
    ExitCode::from(e.exit_code() as u8)
}

/// clap fails before `Cli.format` exists, so `--format json` is read from
/// argv to decide whether the failure gets a JSON envelope.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    );
    if informational || !json_requested(std::env::args().skip(1)) {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => WaypointError::usage(err.to_string()),
        _ => WaypointError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

fn json_requested(args: impl IntoIterator<Item = String>) -> bool {
    let args: Vec<String> = args.into_iter().collect();
    args.iter().enumerate().any(|(i, arg)| {
        arg == "--format=json"
            || (arg == "--format" && args.get(i + 1).is_some_and(|next| next == "json"))
    })
}
