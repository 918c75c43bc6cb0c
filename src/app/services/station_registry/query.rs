//! Ident lookups against the registry tables

use super::{IdentResolver, ReferenceTable, StationRegistry};
use crate::Result;
use crate::app::models::Coord;
use tracing::debug;

impl StationRegistry {
    /// Station coordinate by ICAO ident
    pub fn station(&self, ident: &str) -> Option<&Coord> {
        self.stations.get(&ident.to_uppercase())
    }

    /// Every known location of a navaid ident
    pub fn navaid(&self, ident: &str) -> Option<&[Coord]> {
        self.navaids.get(&ident.to_uppercase()).map(Vec::as_slice)
    }

    /// Airport coordinate by IATA code
    pub fn iata(&self, ident: &str) -> Option<&Coord> {
        self.iata.get(&ident.to_uppercase())
    }

    /// Look up an ident in precedence order, returning the answering table
    /// and its candidates
    pub fn lookup(&self, ident: &str) -> Option<(ReferenceTable, Vec<Coord>)> {
        if let Some(coord) = self.station(ident) {
            return Some((ReferenceTable::Stations, vec![coord.clone()]));
        }
        if let Some(coords) = self.navaid(ident) {
            return Some((ReferenceTable::Navaids, coords.to_vec()));
        }
        self.iata(ident)
            .map(|coord| (ReferenceTable::Iata, vec![coord.clone()]))
    }
}

impl IdentResolver for StationRegistry {
    fn candidates(&self, ident: &str) -> Result<Vec<Coord>> {
        match self.lookup(ident) {
            Some((table, coords)) => {
                debug!("Resolved {} from {} ({} candidates)", ident, table, coords.len());
                Ok(coords)
            }
            None => Ok(Vec::new()),
        }
    }
}
