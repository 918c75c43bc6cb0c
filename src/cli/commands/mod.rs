//! Command implementations for the AIRMET/SIGMET decoder CLI
//!
//! Each command lives in its own module and shares setup code from
//! `shared`.

pub mod parse;
pub mod sanitize;
pub mod shared;
pub mod update;

pub use shared::CommandStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the selected subcommand
///
/// - `parse`: decode bulletins to JSON
/// - `sanitize`: print normalized bulletin text
/// - `update`: one fetch and parse cycle over the configured sources
pub async fn run(args: Args) -> Result<CommandStats> {
    match &args.command {
        Some(Commands::Parse(parse_args)) => parse::run_parse(&args, parse_args).await,
        Some(Commands::Sanitize(sanitize_args)) => {
            sanitize::run_sanitize(&args, sanitize_args).await
        }
        Some(Commands::Update(update_args)) => update::run_update(&args, update_args).await,
        None => Ok(CommandStats::default()),
    }
}
