//! AIRMET / SIGMET Decoder Library
//!
//! A Rust library for decoding free-text aviation hazard advisories
//! (AIRMET and SIGMET bulletins) into structured records describing the
//! hazard, its validity window, affected region, polygon, movement and
//! vertical extent.
//!
//! This library provides tools for:
//! - Sanitizing raw bulletin text for display and diffing
//! - Decoding bulletin headers, validity windows and regions
//! - Extracting current and forecast observations from the report body
//! - Resolving coordinate literals and navaid vectors into coordinates
//! - Resolving station/navaid idents against reference tables
//! - Fetching, parsing and diffing bulletin sets from configured sources

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod advisory_parser;
        pub mod bulletin_manager;
        pub mod spatial_resolver;
        pub mod station_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AdvisoryRecord, Coord, Observation, Timestamp, Units};
pub use app::services::advisory_parser::{AdvisoryParser, sanitize};
pub use app::services::station_registry::{IdentResolver, StationRegistry};
pub use config::Config;

/// Result type alias for the AIRMET/SIGMET decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for advisory decoding and the surrounding services
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Bulletin code missing, unrecognized, or too few header tokens
    #[error("Malformed header: {reason}")]
    MalformedHeader { reason: String },

    /// No VALID token in the report
    #[error("Missing VALID marker in report")]
    MissingValidityMarker,

    /// VALID marker present but the window that should follow it is not
    #[error("Malformed validity window: {reason}")]
    MalformedValidity { reason: String },

    /// Ident lookup returned nothing
    #[error("Unable to resolve ident: {ident}")]
    UnresolvedIdent { ident: String },

    /// Multiple candidates and no neighbouring point to choose between them
    #[error("Ambiguous ident {ident}: {candidates} candidates and no neighbouring point")]
    AmbiguousIdent { ident: String, candidates: usize },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Station registry error
    #[error("Station registry error: {message}")]
    StationRegistry { message: String },

    /// A bulletin source failed to deliver
    #[error("Bulletin fetch from '{source_name}' failed: {message}")]
    BulletinFetch {
        source_name: String,
        message: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed header error
    pub fn malformed_header(reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            reason: reason.into(),
        }
    }

    /// Create a malformed validity error
    pub fn malformed_validity(reason: impl Into<String>) -> Self {
        Self::MalformedValidity {
            reason: reason.into(),
        }
    }

    /// Create an unresolved ident error
    pub fn unresolved_ident(ident: impl Into<String>) -> Self {
        Self::UnresolvedIdent {
            ident: ident.into(),
        }
    }

    /// Create an ambiguous ident error
    pub fn ambiguous_ident(ident: impl Into<String>, candidates: usize) -> Self {
        Self::AmbiguousIdent {
            ident: ident.into(),
            candidates,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a station registry error
    pub fn station_registry(message: impl Into<String>) -> Self {
        Self::StationRegistry {
            message: message.into(),
        }
    }

    /// Create a bulletin fetch error
    pub fn bulletin_fetch(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BulletinFetch {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from decoding a single report rather than
    /// from I/O or configuration
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedHeader { .. }
                | Self::MissingValidityMarker
                | Self::MalformedValidity { .. }
                | Self::UnresolvedIdent { .. }
                | Self::AmbiguousIdent { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<::config::ConfigError> for Error {
    fn from(error: ::config::ConfigError) -> Self {
        Self::Configuration {
            message: error.to_string(),
        }
    }
}
