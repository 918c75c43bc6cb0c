//! Registry loading from reference CSV files

use super::metadata::LoadStats;
use super::parser::{ReferenceRecord, header_map, parse_reference_record};
use super::{ReferenceTable, StationRegistry};
use crate::config::RegistryConfig;
use crate::{Error, Result};
use csv::StringRecord;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

impl StationRegistry {
    /// Load every reference table named in the registry configuration
    ///
    /// Tables without a configured path are left empty. A configured path
    /// that does not exist is an error; individual bad rows are counted and
    /// skipped.
    ///
    /// # Errors
    /// * Returns `Error::StationRegistry` if a configured file doesn't exist
    /// * Returns `Error::CsvParsing` for unreadable CSV files
    pub fn load(config: &RegistryConfig) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();
        let mut registry = Self::new();
        let mut stats = LoadStats::new();

        let tables = [
            (ReferenceTable::Stations, config.stations.as_deref()),
            (ReferenceTable::Navaids, config.navaids.as_deref()),
            (ReferenceTable::Iata, config.iata.as_deref()),
        ];

        for (table, path) in tables {
            let Some(path) = path else {
                debug!("No {} table configured", table);
                continue;
            };
            registry.load_table(table, path, &mut stats)?;
        }

        stats.ambiguous_idents = registry
            .navaids
            .values()
            .filter(|coords| coords.len() > 1)
            .count();
        registry.load_time = start_time;
        stats.load_duration = start_time.elapsed();

        info!("Ident registry loaded. {}", stats.summary());

        Ok((registry, stats))
    }

    /// Load one reference table file into the registry
    pub fn load_table(
        &mut self,
        table: ReferenceTable,
        file_path: &Path,
        stats: &mut LoadStats,
    ) -> Result<()> {
        if !file_path.exists() {
            return Err(Error::station_registry(format!(
                "Reference table does not exist: {}",
                file_path.display()
            )));
        }

        let records = Self::read_reference_file(file_path, stats)?;
        for record in records {
            let ReferenceRecord { ident, .. } = &record;
            let added = match table {
                ReferenceTable::Stations => self.insert_station(ident, record.coord()),
                ReferenceTable::Iata => self.insert_iata(ident, record.coord()),
                ReferenceTable::Navaids => {
                    self.insert_navaid(ident, record.coord());
                    true
                }
            };
            if added {
                stats.entries_loaded += 1;
            } else {
                warn!(
                    "Duplicate {} entry found: ident = {}, keeping existing",
                    table, ident
                );
                stats.duplicates_skipped += 1;
            }
        }

        self.loaded_files.push(file_path.to_path_buf());
        stats.files_processed += 1;
        Ok(())
    }

    /// Read and validate every data row of a reference file
    fn read_reference_file(
        file_path: &Path,
        stats: &mut LoadStats,
    ) -> Result<Vec<ReferenceRecord>> {
        debug!("Loading reference file: {}", file_path.display());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .comment(Some(b'#'))
            .from_path(file_path)
            .map_err(|e| {
                Error::csv_parsing(
                    file_path.to_string_lossy().to_string(),
                    "Failed to open CSV file".to_string(),
                    Some(e),
                )
            })?;

        let headers = reader.headers().map_err(|e| {
            Error::csv_parsing(
                file_path.to_string_lossy().to_string(),
                "Failed to read CSV header".to_string(),
                Some(e),
            )
        })?;
        let columns = header_map(headers);

        let mut records = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record).map_err(|e| {
            Error::csv_parsing(
                file_path.to_string_lossy().to_string(),
                "Failed to read CSV record".to_string(),
                Some(e),
            )
        })? {
            stats.total_records_found += 1;
            match parse_reference_record(&record, &columns) {
                Ok(parsed) => records.push(parsed),
                Err(e) => {
                    let line = record.position().map_or(0, |p| p.line());
                    warn!("Skipping {} line {}: {}", file_path.display(), line, e);
                    stats.invalid_records += 1;
                    stats
                        .errors
                        .push(format!("{}:{}: {}", file_path.display(), line, e));
                }
            }
        }

        debug!(
            "Read {} valid records from {}",
            records.len(),
            file_path.display()
        );
        Ok(records)
    }
}
