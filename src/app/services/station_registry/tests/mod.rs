//! Shared test utilities and fixtures for ident registry tests

use crate::config::RegistryConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod loader_tests;
pub mod query_tests;

/// Station table with one duplicate row
pub const STATIONS_CSV: &str = "\
ident,name,latitude,longitude
KBNA,Nashville International,36.1245,-86.6782
RJTD,Tokyo,35.6895,139.6917
KBNA,Nashville duplicate,0.0,0.0
";

/// Navaid table where ABC exists in two places
pub const NAVAIDS_CSV: &str = "\
ident,latitude,longitude
BNA,36.1370,-86.6846
ABC,40.0,-100.0
ABC,10.0,20.0
ISN,48.1782,-103.6426
";

/// IATA table overlapping the navaid table for BNA
pub const IATA_CSV: &str = "\
ident,latitude,longitude
BNA,36.1245,-86.6782
NRT,35.7720,140.3929
";

/// Write a reference file into the temp directory
pub fn write_table(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// Write all three fixture tables and return a config pointing at them
pub fn create_test_tables(temp_dir: &TempDir) -> RegistryConfig {
    let dir = temp_dir.path();
    RegistryConfig {
        stations: Some(write_table(dir, "stations.csv", STATIONS_CSV)),
        navaids: Some(write_table(dir, "navaids.csv", NAVAIDS_CSV)),
        iata: Some(write_table(dir, "iata.csv", IATA_CSV)),
    }
}
