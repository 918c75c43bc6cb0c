//! Spatial reference resolution for advisory bodies
//!
//! Turns the boundary description of a report into coordinates. The work is
//! split into:
//! - [`patterns`] - span scanning for lateral clauses, coordinate literals and navaid references
//! - [`geodesy`] - great-circle distance and destination point
//! - [`disambiguation`] - choosing between candidate locations of a shared ident
//! - [`flight_path`] - resolving mixed coordinate/ident sequences
//!
//! ## Usage
//!
//! ```rust
//! use airsigmet::app::services::spatial_resolver::extract_bounds;
//! use airsigmet::StationRegistry;
//!
//! # fn example() -> airsigmet::Result<()> {
//! let registry = StationRegistry::new();
//! let extent = extract_bounds("SEV TURB N OF N2050 FL250", &registry)?;
//! assert_eq!(extent.bounds, vec!["N OF N2050"]);
//! assert_eq!(extent.remainder, "SEV TURB FL250");
//! # Ok(())
//! # }
//! ```

pub mod disambiguation;
pub mod flight_path;
pub mod geodesy;
pub mod patterns;

#[cfg(test)]
pub mod tests;

pub use disambiguation::disambiguate;
pub use flight_path::{PathValue, to_coordinates};
pub use patterns::{NavaidRef, Span, SpanKind};

use crate::Result;
use crate::app::models::Coord;
use crate::app::services::station_registry::IdentResolver;
use tracing::debug;

const FROM_PREFIX: &str = "FROM ";

/// Boundary information pulled out of a report body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpatialExtent {
    /// Polygon vertices in the order they appear in the text
    pub coords: Vec<Coord>,
    /// Lateral clauses such as `N OF N2050`
    pub bounds: Vec<String>,
    /// Report text with the boundary description removed
    pub remainder: String,
}

/// Extract and resolve every spatial reference in a report body
///
/// Everything from the earliest claimed span (or an earlier `FROM`) through
/// the end of the last claimed span is treated as boundary text and dropped
/// from the remainder.
///
/// # Errors
/// * `Error::UnresolvedIdent` if a referenced navaid is unknown
/// * `Error::AmbiguousIdent` if a shared ident has no neighbouring point
pub fn extract_bounds(report: &str, resolver: &dyn IdentResolver) -> Result<SpatialExtent> {
    let scan = patterns::scan(report);
    if scan.spans.is_empty() {
        return Ok(SpatialExtent {
            remainder: collapse(report),
            ..SpatialExtent::default()
        });
    }

    let navaids: Vec<&NavaidRef> = scan
        .spans
        .iter()
        .filter_map(|span| match &span.kind {
            SpanKind::Navaid(navaid) => Some(navaid),
            _ => None,
        })
        .collect();
    let mut navaid_coords = resolve_navaids(&navaids, resolver)?.into_iter();

    let mut coords = Vec::new();
    let mut bounds = Vec::new();
    for span in &scan.spans {
        match &span.kind {
            SpanKind::Lateral(clause) => bounds.push(clause.clone()),
            SpanKind::Coordinate(coord) => coords.push(coord.clone()),
            SpanKind::Navaid(_) => coords.extend(navaid_coords.next()),
        }
    }

    let mut start = scan.spans.iter().map(|s| s.start).min().unwrap_or(0);
    let end = scan.spans.iter().map(|s| s.end).max().unwrap_or(report.len());
    if let Some(from_index) = scan.masked.find(FROM_PREFIX) {
        start = start.min(from_index);
    }
    let remainder = collapse(&format!("{} {}", &scan.masked[..start], &scan.masked[end..]));

    debug!(
        "Extracted {} coordinates and {} lateral bounds",
        coords.len(),
        bounds.len()
    );
    Ok(SpatialExtent {
        coords,
        bounds,
        remainder,
    })
}

/// Resolve navaid references to coordinates, applying vector offsets
fn resolve_navaids(navaids: &[&NavaidRef], resolver: &dyn IdentResolver) -> Result<Vec<Coord>> {
    if navaids.is_empty() {
        return Ok(Vec::new());
    }

    let idents: Vec<String> = navaids.iter().map(|n| n.ident.clone()).collect();
    let candidates = resolver.resolve_batch(&idents)?;
    let origins = disambiguate(&idents, candidates)?;

    Ok(navaids
        .iter()
        .zip(origins)
        .map(|(navaid, origin)| match navaid.vector {
            Some(vector) => {
                let (lat, lon) =
                    geodesy::destination(&origin, vector.distance_nm, vector.bearing);
                Coord::new(lat, lon, navaid.repr.clone())
            }
            None => origin.with_repr(navaid.repr.clone()),
        })
        .collect())
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
