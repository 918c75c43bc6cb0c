//! Update command implementation
//!
//! Runs one fetch and parse cycle over the configured sources and prints a
//! summary or the decoded reports.

use super::shared::{CommandStats, build_parser, load_config, setup_logging};
use crate::Result;
use crate::app::services::bulletin_manager::{
    AirSigManager, AirSigmetReport, BulletinSource, FileBulletinSource,
};
use crate::cli::args::{Args, OutputFormat, UpdateArgs};
use colored::Colorize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::info;

/// Update command runner
pub async fn run_update(args: &Args, update_args: &UpdateArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    let config = load_config(args)?;
    setup_logging(&config, args.quiet)?;

    let sources: Vec<Box<dyn BulletinSource>> = config
        .sources
        .iter()
        .map(|source| Box::new(FileBulletinSource::from(source)) as Box<dyn BulletinSource>)
        .collect();
    info!("Updating from sources: {:?}", config.sources);

    let mut manager = AirSigManager::new(sources, build_parser(&config));
    if let Some(date) = update_args.date {
        manager = manager.with_issued(date);
    }
    let changed = manager.update().await?;

    let reports = manager.reports().unwrap_or_default();
    match update_args.output_format {
        OutputFormat::Human => print_summary(&manager, reports, changed),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
    }

    let update_stats = manager.last_stats();
    Ok(CommandStats {
        bulletins_read: update_stats.bulletins_fetched,
        reports_parsed: update_stats.reports_parsed,
        reports_failed: update_stats.reports_skipped,
        processing_time: start_time.elapsed(),
    })
}

fn print_summary(manager: &AirSigManager, reports: &[AirSigmetReport], changed: bool) {
    let stats = manager.last_stats();
    println!("{}", "AIRMET/SIGMET Update".bold());
    println!("====================");

    let mut per_source: BTreeMap<&str, usize> = BTreeMap::new();
    for report in reports {
        *per_source.entry(report.source.as_str()).or_default() += 1;
    }
    for name in manager.source_names() {
        println!(
            "  {:<16} {} reports",
            name,
            per_source.get(name).copied().unwrap_or(0)
        );
    }

    println!(
        "Fetched {} bulletins: {} parsed, {} skipped",
        stats.bulletins_fetched,
        stats.reports_parsed.to_string().green(),
        if stats.reports_skipped > 0 {
            stats.reports_skipped.to_string().yellow()
        } else {
            stats.reports_skipped.to_string().normal()
        }
    );
    if changed {
        println!("{}", "Snapshot changed".green());
    } else {
        println!("{}", "No changes".dimmed());
    }
}
