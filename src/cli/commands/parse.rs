//! Parse command implementation
//!
//! Reads bulletins from a file or standard input and prints one JSON record
//! per decoded bulletin. A bulletin that fails to decode is reported on
//! stderr and the batch continues.

use super::shared::{CommandStats, build_parser, load_config, read_input, setup_logging};
use crate::Result;
use crate::app::services::bulletin_manager::split_bulletins;
use crate::cli::args::{Args, ParseArgs};
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

/// Parse command runner
pub async fn run_parse(args: &Args, parse_args: &ParseArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    let config = load_config(args)?;
    setup_logging(&config, args.quiet)?;
    debug!("Parse arguments: {:?}", parse_args);

    let text = read_input(parse_args.input.as_deref()).await?;
    let bulletins = split_bulletins(&text);
    info!("Parsing {} bulletins", bulletins.len());

    let parser = build_parser(&config);
    let mut stats = CommandStats {
        bulletins_read: bulletins.len(),
        ..Default::default()
    };

    for (index, bulletin) in bulletins.iter().enumerate() {
        match parser.parse(bulletin, parse_args.date) {
            Ok(record) => {
                debug!(
                    "Bulletin {} decoded for {} with {} vertices",
                    index + 1,
                    record.region,
                    record.all_coords().count()
                );
                let json = if parse_args.pretty {
                    serde_json::to_string_pretty(&record)?
                } else {
                    serde_json::to_string(&record)?
                };
                println!("{}", json);
                stats.reports_parsed += 1;
            }
            Err(e) => {
                let first_line = bulletin.lines().next().unwrap_or_default();
                eprintln!(
                    "{} bulletin {} ({}): {}",
                    "✗".red(),
                    index + 1,
                    first_line,
                    e
                );
                stats.reports_failed += 1;
            }
        }
    }

    stats.processing_time = start_time.elapsed();
    if !args.quiet {
        eprintln!(
            "{} {} parsed, {} failed in {:.2}s",
            "Done:".green().bold(),
            stats.reports_parsed,
            stats.reports_failed,
            stats.processing_time.as_secs_f64()
        );
    }
    Ok(stats)
}
