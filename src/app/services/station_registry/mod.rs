//! Ident registry service for station, navaid and IATA lookups
//!
//! This module resolves short idents found in advisory text to coordinate
//! candidates. Three reference tables are kept: ICAO stations, navaids and
//! IATA airport codes. A lookup checks them in that order and the first table
//! holding the ident answers. Navaid idents are not unique worldwide, so a
//! navaid lookup may return several candidates.

use crate::Result;
use crate::app::models::Coord;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

pub mod lazy;
pub mod loader;
pub mod metadata;
pub mod parser;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use lazy::LazyRegistry;
pub use metadata::{LoadStats, RegistryMetadata};
pub use parser::ReferenceRecord;

/// Resolves idents to zero, one or many coordinate candidates
pub trait IdentResolver: Send + Sync {
    /// Coordinate candidates for a single ident. Empty when unknown.
    fn candidates(&self, ident: &str) -> Result<Vec<Coord>>;

    /// Candidates for each ident, in input order
    fn resolve_batch(&self, idents: &[String]) -> Result<Vec<Vec<Coord>>> {
        idents.iter().map(|ident| self.candidates(ident)).collect()
    }
}

/// Which reference table an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceTable {
    Stations,
    Navaids,
    Iata,
}

impl std::fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReferenceTable::Stations => "stations",
            ReferenceTable::Navaids => "navaids",
            ReferenceTable::Iata => "iata",
        };
        f.write_str(name)
    }
}

/// In-memory ident registry
///
/// Idents are stored uppercase. Station and IATA tables map an ident to one
/// coordinate; the navaid table keeps every coordinate seen for an ident.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    pub(crate) stations: HashMap<String, Coord>,
    pub(crate) navaids: HashMap<String, Vec<Coord>>,
    pub(crate) iata: HashMap<String, Coord>,

    /// Reference files that were loaded into this registry
    pub(crate) loaded_files: Vec<PathBuf>,

    /// Timestamp when the registry was last loaded
    pub(crate) load_time: Instant,
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            stations: HashMap::new(),
            navaids: HashMap::new(),
            iata: HashMap::new(),
            loaded_files: Vec::new(),
            load_time: Instant::now(),
        }
    }

    /// Add a station, keeping any existing entry. Returns whether it was added.
    pub fn insert_station(&mut self, ident: &str, coord: Coord) -> bool {
        insert_unique(&mut self.stations, ident, coord)
    }

    /// Add an IATA code, keeping any existing entry. Returns whether it was added.
    pub fn insert_iata(&mut self, ident: &str, coord: Coord) -> bool {
        insert_unique(&mut self.iata, ident, coord)
    }

    /// Add a navaid location. Repeated idents accumulate as candidates.
    pub fn insert_navaid(&mut self, ident: &str, coord: Coord) {
        self.navaids
            .entry(ident.to_uppercase())
            .or_default()
            .push(coord);
    }

    /// Number of entries in a table. Navaids count every location.
    pub fn count(&self, table: ReferenceTable) -> usize {
        match table {
            ReferenceTable::Stations => self.stations.len(),
            ReferenceTable::Navaids => self.navaids.values().map(Vec::len).sum(),
            ReferenceTable::Iata => self.iata.len(),
        }
    }

    /// Whether every table is empty
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty() && self.navaids.is_empty() && self.iata.is_empty()
    }

    /// Get registry metadata
    pub fn metadata(&self) -> RegistryMetadata {
        RegistryMetadata {
            loaded_files: self.loaded_files.clone(),
            station_count: self.count(ReferenceTable::Stations),
            navaid_count: self.count(ReferenceTable::Navaids),
            iata_count: self.count(ReferenceTable::Iata),
            load_time: self.load_time,
        }
    }
}

fn insert_unique(table: &mut HashMap<String, Coord>, ident: &str, coord: Coord) -> bool {
    match table.entry(ident.to_uppercase()) {
        std::collections::hash_map::Entry::Vacant(e) => {
            e.insert(coord);
            true
        }
        std::collections::hash_map::Entry::Occupied(_) => false,
    }
}
