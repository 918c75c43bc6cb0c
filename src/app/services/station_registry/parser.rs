//! Reference table record parsing
//!
//! Reference tables are headerful CSV files with at least `ident`, `latitude`
//! and `longitude` columns. Column order is free and extra columns are
//! ignored. Header names are matched case-insensitively.

use crate::app::models::Coord;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// A single reference table row
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRecord {
    pub ident: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ReferenceRecord {
    /// Coordinate for this record, using the ident as its source text
    pub fn coord(&self) -> Coord {
        Coord::new(self.latitude, self.longitude, self.ident.clone())
    }
}

/// Build a lowercase column name to index map from a header record
pub fn header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_lowercase(), i))
        .collect()
}

/// Parse and validate one reference record
pub fn parse_reference_record(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<ReferenceRecord> {
    let ident = get_field_by_name(record, header_map, "ident")?.to_uppercase();
    if ident.is_empty() || !ident.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::station_registry(format!(
            "Invalid ident '{}'",
            ident
        )));
    }

    let latitude = parse_degrees(record, header_map, "latitude", 90.0)?;
    let longitude = parse_degrees(record, header_map, "longitude", 180.0)?;

    Ok(ReferenceRecord {
        ident,
        latitude,
        longitude,
    })
}

fn parse_degrees(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    field_name: &str,
    limit: f64,
) -> Result<f64> {
    let raw = get_field_by_name(record, header_map, field_name)?;
    let value: f64 = raw.parse().map_err(|_| {
        Error::station_registry(format!("Invalid {} value '{}'", field_name, raw))
    })?;
    if !value.is_finite() || value.abs() > limit {
        return Err(Error::station_registry(format!(
            "{} {} is out of range",
            field_name, value
        )));
    }
    Ok(value)
}

/// Helper function to get field value by name from record
fn get_field_by_name(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    field_name: &str,
) -> Result<String> {
    let index = header_map.get(field_name).ok_or_else(|| {
        Error::station_registry(format!("Missing required column: {}", field_name))
    })?;

    let value = record
        .get(*index)
        .ok_or_else(|| Error::station_registry(format!("Missing value for field: {}", field_name)))?
        .trim()
        .to_string();

    if value.is_empty() {
        return Err(Error::station_registry(format!(
            "Empty value for required field: {}",
            field_name
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> HashMap<String, usize> {
        header_map(&StringRecord::from(vec!["Ident", "name", "latitude", "longitude"]))
    }

    #[test]
    fn test_parse_reference_record_valid() {
        let record = StringRecord::from(vec!["bna", "Nashville", "36.1370", "-86.6846"]);
        let parsed = parse_reference_record(&record, &headers()).unwrap();

        assert_eq!(parsed.ident, "BNA");
        assert!((parsed.latitude - 36.137).abs() < 1e-9);
        assert!((parsed.longitude + 86.6846).abs() < 1e-9);
        assert_eq!(parsed.coord().repr, "BNA");
    }

    #[test]
    fn test_parse_reference_record_out_of_range() {
        let record = StringRecord::from(vec!["BNA", "", "96.0", "-86.6"]);
        assert!(parse_reference_record(&record, &headers()).is_err());

        let record = StringRecord::from(vec!["BNA", "", "36.0", "-186.6"]);
        assert!(parse_reference_record(&record, &headers()).is_err());
    }

    #[test]
    fn test_parse_reference_record_missing_fields() {
        let record = StringRecord::from(vec!["", "", "36.0", "-86.6"]);
        assert!(parse_reference_record(&record, &headers()).is_err());

        let record = StringRecord::from(vec!["BNA", "", "abc", "-86.6"]);
        assert!(parse_reference_record(&record, &headers()).is_err());

        let no_lon = header_map(&StringRecord::from(vec!["ident", "latitude"]));
        let record = StringRecord::from(vec!["BNA", "36.0"]);
        assert!(parse_reference_record(&record, &no_lon).is_err());
    }

    #[test]
    fn test_parse_reference_record_rejects_blank_ident() {
        for ident in ["  ", "\t", "B NA", "BNA-1"] {
            let record = StringRecord::from(vec![ident, "", "36.0", "-86.6"]);
            assert!(
                parse_reference_record(&record, &headers()).is_err(),
                "accepted ident {:?}",
                ident
            );
        }
    }
}
