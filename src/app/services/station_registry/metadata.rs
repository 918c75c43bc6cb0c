//! Registry metadata and load statistics tracking

use std::path::PathBuf;
use std::time::Instant;

/// Statistics about the registry loading process
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Number of reference files processed
    pub files_processed: usize,

    /// Total number of data rows read
    pub total_records_found: usize,

    /// Number of entries added to the registry
    pub entries_loaded: usize,

    /// Station or IATA rows skipped because the ident was already present
    pub duplicates_skipped: usize,

    /// Rows that failed validation
    pub invalid_records: usize,

    /// Navaid idents with more than one location
    pub ambiguous_idents: usize,

    /// Time taken to load the registry
    pub load_duration: std::time::Duration,

    /// Any errors encountered during loading
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            files_processed: 0,
            total_records_found: 0,
            entries_loaded: 0,
            duplicates_skipped: 0,
            invalid_records: 0,
            ambiguous_idents: 0,
            load_duration: std::time::Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Calculate the share of rows that were not loaded, as a percentage
    pub fn rejection_rate(&self) -> f64 {
        if self.total_records_found == 0 {
            0.0
        } else {
            let rejected = self.total_records_found - self.entries_loaded;
            (rejected as f64 / self.total_records_found as f64) * 100.0
        }
    }

    /// Check if any errors occurred during loading
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Processed {} files, loaded {} entries ({} duplicates, {} invalid, {} ambiguous navaids) in {:.2}s",
            self.files_processed,
            self.entries_loaded,
            self.duplicates_skipped,
            self.invalid_records,
            self.ambiguous_idents,
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about the registry
#[derive(Debug, Clone)]
pub struct RegistryMetadata {
    /// Reference files that were loaded
    pub loaded_files: Vec<PathBuf>,

    pub station_count: usize,
    pub navaid_count: usize,
    pub iata_count: usize,

    /// When the registry was loaded
    pub load_time: Instant,
}

impl RegistryMetadata {
    /// Get the age of the registry since loading
    pub fn age(&self) -> std::time::Duration {
        self.load_time.elapsed()
    }

    /// Get a summary string of the registry
    pub fn summary(&self) -> String {
        format!(
            "Registry with {} stations, {} navaids and {} IATA codes from {} files (age: {:.1}s)",
            self.station_count,
            self.navaid_count,
            self.iata_count,
            self.loaded_files.len(),
            self.age().as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_load_stats_new() {
        let stats = LoadStats::new();
        assert_eq!(stats.files_processed, 0);
        assert_eq!(stats.entries_loaded, 0);
        assert!(!stats.has_errors());
        assert_eq!(stats.rejection_rate(), 0.0);
    }

    #[test]
    fn test_load_stats_summary() {
        let mut stats = LoadStats::new();
        stats.files_processed = 3;
        stats.total_records_found = 10;
        stats.entries_loaded = 8;
        stats.duplicates_skipped = 1;
        stats.invalid_records = 1;
        stats.load_duration = Duration::from_millis(1500);

        assert_eq!(stats.rejection_rate(), 20.0);
        let summary = stats.summary();
        assert!(summary.contains("3 files"));
        assert!(summary.contains("8 entries"));
        assert!(summary.contains("1 duplicates"));
        assert!(summary.contains("1.50s"));
    }

    #[test]
    fn test_registry_metadata_summary() {
        let metadata = RegistryMetadata {
            loaded_files: vec![PathBuf::from("stations.csv")],
            station_count: 5,
            navaid_count: 7,
            iata_count: 2,
            load_time: Instant::now(),
        };
        assert!(metadata.age().as_millis() < 1000);
        let summary = metadata.summary();
        assert!(summary.contains("5 stations"));
        assert!(summary.contains("7 navaids"));
        assert!(summary.contains("1 files"));
    }
}
