//! Configuration management and validation.
//!
//! Provides the reference table locations, the ordered bulletin sources and
//! logging settings. Values are layered: built-in defaults, then an optional
//! TOML file, then `AIRSIGMET__` environment variables, then command line
//! overrides applied by the caller with the `with_*` builders.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, ENV_PREFIX};
use crate::{Error, Result};
use ::config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reference table locations for ident resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// ICAO station table
    pub stations: Option<PathBuf>,

    /// Navaid table
    pub navaids: Option<PathBuf>,

    /// IATA airport code table
    pub iata: Option<PathBuf>,
}

/// A file-backed bulletin source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Name reported on every bulletin from this source
    pub name: String,

    /// Glob pattern selecting the bulletin files
    pub pattern: String,
}

impl SourceConfig {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level for this crate's log output
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub registry: RegistryConfig,

    /// Bulletin sources in merge order
    pub sources: Vec<SourceConfig>,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            sources: vec![
                SourceConfig::new("domestic", "bulletins/domestic/*.txt"),
                SourceConfig::new("international", "bulletins/international/*.txt"),
            ],
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Platform configuration file location, if a config directory exists
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from defaults, a TOML file and the environment
    ///
    /// An explicit path must exist. Without one, the platform default path is
    /// used when present.
    pub fn load_layered(path: Option<&Path>) -> Result<Self> {
        let defaults = ::config::Config::try_from(&Config::default())?;
        let mut builder = ::config::Config::builder().add_source(defaults);

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                debug!("Loading configuration from {}", path.display());
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(default_path) = Self::default_config_path().filter(|p| p.exists()) {
                    debug!("Loading configuration from {}", default_path.display());
                    builder = builder.add_source(File::from(default_path).required(false));
                }
            }
        }

        let config: Config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(Error::configuration("Source name cannot be empty"));
            }
            if source.pattern.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Source '{}' has an empty pattern",
                    source.name
                )));
            }
            if !names.insert(source.name.as_str()) {
                return Err(Error::configuration(format!(
                    "Duplicate source name '{}'",
                    source.name
                )));
            }
        }

        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Override the station table path
    pub fn with_stations(mut self, path: PathBuf) -> Self {
        self.registry.stations = Some(path);
        self
    }

    /// Override the navaid table path
    pub fn with_navaids(mut self, path: PathBuf) -> Self {
        self.registry.navaids = Some(path);
        self
    }

    /// Override the IATA table path
    pub fn with_iata(mut self, path: PathBuf) -> Self {
        self.registry.iata = Some(path);
        self
    }

    /// Replace the configured bulletin sources
    pub fn with_sources(mut self, sources: Vec<SourceConfig>) -> Self {
        self.sources = sources;
        self
    }

    /// Override the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}
