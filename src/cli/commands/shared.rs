//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, input reading and parser
//! construction used by every subcommand.

use crate::app::services::advisory_parser::AdvisoryParser;
use crate::app::services::station_registry::LazyRegistry;
use crate::cli::args::{Args, is_stdin};
use crate::config::Config;
use crate::{Error, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Counts reported by every command
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Bulletins read from the input or sources
    pub bulletins_read: usize,
    /// Reports decoded successfully
    pub reports_parsed: usize,
    /// Reports that failed to decode
    pub reports_failed: usize,
    /// Total command time
    pub processing_time: std::time::Duration,
}

impl CommandStats {
    /// Share of bulletins that failed to decode, as a percentage
    pub fn failure_rate(&self) -> f64 {
        if self.bulletins_read == 0 {
            0.0
        } else {
            (self.reports_failed as f64 / self.bulletins_read as f64) * 100.0
        }
    }
}

/// Load layered configuration and apply command-line overrides
pub fn load_config(args: &Args) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;
    if let Some(path) = &args.stations {
        config = config.with_stations(path.clone());
    }
    if let Some(path) = &args.navaids {
        config = config.with_navaids(path.clone());
    }
    if let Some(path) = &args.iata {
        config = config.with_iata(path.clone());
    }
    let level = args.get_log_level(&config.logging.level);
    config = config.with_log_level(level);
    config.validate()?;
    Ok(config)
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_logging(config: &Config, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = &config.logging.level;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("airsigmet={}", log_level)));

    let result = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read bulletin text from a file, or standard input for `-` or no path
pub async fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if !is_stdin(Some(path)) => {
            tokio::fs::read_to_string(path).await.map_err(|e| {
                Error::io(format!("Failed to read input file: {}", path.display()), e)
            })
        }
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| Error::io("Failed to read standard input", e))?;
            Ok(text)
        }
    }
}

/// Parser backed by reference tables that load on first lookup
pub fn build_parser(config: &Config) -> AdvisoryParser {
    let registry = Arc::new(LazyRegistry::new(config.registry.clone()));
    AdvisoryParser::new(registry)
}
