//! Sanitize command implementation

use super::shared::{CommandStats, load_config, read_input, setup_logging};
use crate::Result;
use crate::app::services::advisory_parser::sanitize;
use crate::app::services::bulletin_manager::split_bulletins;
use crate::cli::args::{Args, SanitizeArgs};
use std::time::Instant;

/// Print the sanitized form of every bulletin, one per line
pub async fn run_sanitize(args: &Args, sanitize_args: &SanitizeArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    let config = load_config(args)?;
    setup_logging(&config, args.quiet)?;

    let text = read_input(sanitize_args.input.as_deref()).await?;
    let bulletins = split_bulletins(&text);
    for bulletin in &bulletins {
        println!("{}", sanitize(bulletin));
    }

    Ok(CommandStats {
        bulletins_read: bulletins.len(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}
