//! Tests for registry loading functionality

use super::*;
use crate::app::services::station_registry::{ReferenceTable, StationRegistry};
use tempfile::TempDir;

#[test]
fn test_station_registry_new() {
    let registry = StationRegistry::new();

    assert!(registry.is_empty());
    assert_eq!(registry.count(ReferenceTable::Stations), 0);
    assert!(registry.loaded_files.is_empty());
}

#[test]
fn test_load_all_tables() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_tables(&temp_dir);

    let (registry, stats) = StationRegistry::load(&config).unwrap();

    assert_eq!(registry.count(ReferenceTable::Stations), 2);
    assert_eq!(registry.count(ReferenceTable::Navaids), 4);
    assert_eq!(registry.count(ReferenceTable::Iata), 2);
    assert_eq!(registry.loaded_files.len(), 3);

    assert_eq!(stats.files_processed, 3);
    assert_eq!(stats.total_records_found, 9);
    assert_eq!(stats.entries_loaded, 8);
    assert_eq!(stats.duplicates_skipped, 1);
    assert_eq!(stats.ambiguous_idents, 1);
    assert!(!stats.has_errors());
}

#[test]
fn test_duplicate_station_keeps_first() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_tables(&temp_dir);

    let (registry, _) = StationRegistry::load(&config).unwrap();
    let kbna = registry.station("KBNA").unwrap();
    assert!((kbna.lat - 36.1245).abs() < 1e-9);
}

#[test]
fn test_unconfigured_tables_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let config = RegistryConfig {
        stations: None,
        navaids: Some(write_table(temp_dir.path(), "navaids.csv", NAVAIDS_CSV)),
        iata: None,
    };

    let (registry, stats) = StationRegistry::load(&config).unwrap();
    assert_eq!(registry.count(ReferenceTable::Stations), 0);
    assert_eq!(registry.count(ReferenceTable::Navaids), 4);
    assert_eq!(stats.files_processed, 1);
}

#[test]
fn test_missing_file_is_an_error() {
    let config = RegistryConfig {
        stations: Some(PathBuf::from("/nonexistent/stations.csv")),
        navaids: None,
        iata: None,
    };

    let result = StationRegistry::load(&config);
    assert!(matches!(result, Err(crate::Error::StationRegistry { .. })));
}

#[test]
fn test_invalid_rows_are_counted_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let content = "\
ident,latitude,longitude
GOOD,10.0,10.0
BAD,abc,10.0
,10.0,10.0
FAR,95.0,10.0
";
    let config = RegistryConfig {
        stations: Some(write_table(temp_dir.path(), "stations.csv", content)),
        navaids: None,
        iata: None,
    };

    let (registry, stats) = StationRegistry::load(&config).unwrap();
    assert_eq!(registry.count(ReferenceTable::Stations), 1);
    assert_eq!(stats.total_records_found, 4);
    assert_eq!(stats.invalid_records, 3);
    assert_eq!(stats.errors.len(), 3);
    assert!(stats.has_errors());
}
