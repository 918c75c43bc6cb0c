//! Flight path resolution
//!
//! Converts a route made of literal coordinates and idents into
//! coordinates. Literal coordinates are kept as given and act as neighbours
//! when an ident has more than one candidate location.

use super::disambiguation::disambiguate;
use crate::Result;
use crate::app::models::Coord;
use crate::app::services::station_registry::IdentResolver;

/// One element of a flight path
#[derive(Debug, Clone, PartialEq)]
pub enum PathValue {
    Coord(Coord),
    Ident(String),
}

impl From<Coord> for PathValue {
    fn from(coord: Coord) -> Self {
        Self::Coord(coord)
    }
}

impl From<&str> for PathValue {
    fn from(ident: &str) -> Self {
        Self::Ident(ident.to_string())
    }
}

/// Resolve every path element to a coordinate, preserving order
///
/// Idents are looked up with the resolver's station, navaid, IATA precedence.
pub fn to_coordinates(values: &[PathValue], resolver: &dyn IdentResolver) -> Result<Vec<Coord>> {
    let labels: Vec<String> = values
        .iter()
        .map(|value| match value {
            PathValue::Coord(coord) => coord.repr.clone(),
            PathValue::Ident(ident) => ident.clone(),
        })
        .collect();

    let candidates = values
        .iter()
        .map(|value| match value {
            PathValue::Coord(coord) => Ok(vec![coord.clone()]),
            PathValue::Ident(ident) => resolver.candidates(ident),
        })
        .collect::<Result<Vec<_>>>()?;

    disambiguate(&labels, candidates)
}
