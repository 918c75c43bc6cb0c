//! Command-line argument definitions for the AIRMET/SIGMET decoder
//!
//! This module defines the CLI interface using the clap derive API. Global
//! flags apply to every subcommand and override the layered configuration.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the AIRMET/SIGMET decoder
#[derive(Debug, Clone, Parser)]
#[command(
    name = "airsigmet",
    version,
    about = "Decode AIRMET and SIGMET aviation hazard advisories into structured records",
    long_about = "Decodes free-text AIRMET and SIGMET bulletins into structured JSON records \
                  describing the hazard, validity window, region, boundary polygon, movement \
                  and vertical extent. Navaid references are resolved against station, navaid \
                  and IATA reference tables."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// Defaults to the platform config directory (airsigmet/config.toml)
    /// when present.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Station reference table (CSV), overriding the configuration
    #[arg(long = "stations", value_name = "FILE", global = true)]
    pub stations: Option<PathBuf>,

    /// Navaid reference table (CSV), overriding the configuration
    #[arg(long = "navaids", value_name = "FILE", global = true)]
    pub navaids: Option<PathBuf>,

    /// IATA reference table (CSV), overriding the configuration
    #[arg(long = "iata", value_name = "FILE", global = true)]
    pub iata: Option<PathBuf>,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress output except errors"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse bulletins and print the decoded records as JSON
    Parse(ParseArgs),
    /// Print the sanitized form of each bulletin
    Sanitize(SanitizeArgs),
    /// Run one update cycle over the configured bulletin sources
    Update(UpdateArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Bulletin file to read, or `-` for standard input
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Issued date (YYYY-MM-DD) used to anchor day/time-only timestamps
    #[arg(short = 'd', long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// Arguments for the sanitize command
#[derive(Debug, Clone, Parser)]
pub struct SanitizeArgs {
    /// Bulletin file to read, or `-` for standard input
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for the update command
#[derive(Debug, Clone, Parser)]
pub struct UpdateArgs {
    /// Issued date (YYYY-MM-DD) used to anchor day/time-only timestamps
    #[arg(short = 'd', long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Output format for the update summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the update summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// Decoded reports as JSON
    Json,
}

impl Args {
    /// Log level from the flags, falling back to the configured level
    pub fn get_log_level(&self, configured: &str) -> String {
        if self.quiet {
            return "error".to_string();
        }
        match self.verbose {
            0 => configured.to_lowercase(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

/// Whether an input argument means standard input
pub fn is_stdin(input: Option<&Path>) -> bool {
    input.is_none_or(|path| path == Path::new("-"))
}
