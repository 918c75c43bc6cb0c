//! Tests for ident lookup precedence

use crate::app::models::Coord;
use crate::app::services::station_registry::{IdentResolver, ReferenceTable, StationRegistry};

fn create_test_registry() -> StationRegistry {
    let mut registry = StationRegistry::new();
    registry.insert_station("KBNA", Coord::new(36.1245, -86.6782, "KBNA"));
    registry.insert_navaid("BNA", Coord::new(36.1370, -86.6846, "BNA"));
    registry.insert_navaid("ABC", Coord::new(40.0, -100.0, "ABC"));
    registry.insert_navaid("ABC", Coord::new(10.0, 20.0, "ABC"));
    registry.insert_iata("BNA", Coord::new(36.1245, -86.6782, "BNA"));
    registry.insert_iata("NRT", Coord::new(35.7720, 140.3929, "NRT"));
    registry
}

#[test]
fn test_station_wins_over_other_tables() {
    let registry = create_test_registry();
    let (table, coords) = registry.lookup("KBNA").unwrap();
    assert_eq!(table, ReferenceTable::Stations);
    assert_eq!(coords.len(), 1);
}

#[test]
fn test_navaid_wins_over_iata() {
    let registry = create_test_registry();
    let (table, coords) = registry.lookup("BNA").unwrap();
    assert_eq!(table, ReferenceTable::Navaids);
    assert!((coords[0].lat - 36.137).abs() < 1e-9);
}

#[test]
fn test_iata_fallback() {
    let registry = create_test_registry();
    let (table, _) = registry.lookup("NRT").unwrap();
    assert_eq!(table, ReferenceTable::Iata);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let registry = create_test_registry();
    assert!(registry.station("kbna").is_some());
    assert_eq!(registry.navaid("abc").map(<[Coord]>::len), Some(2));
}

#[test]
fn test_candidates_and_batch() {
    let registry = create_test_registry();

    assert_eq!(registry.candidates("ABC").unwrap().len(), 2);
    assert!(registry.candidates("ZZZ").unwrap().is_empty());

    let idents = vec!["BNA".to_string(), "ZZZ".to_string(), "ABC".to_string()];
    let batch = registry.resolve_batch(&idents).unwrap();
    assert_eq!(batch.iter().map(Vec::len).collect::<Vec<_>>(), vec![1, 0, 2]);
}

#[test]
fn test_duplicate_station_insert_is_rejected() {
    let mut registry = create_test_registry();
    assert!(!registry.insert_station("kbna", Coord::new(0.0, 0.0, "KBNA")));
    assert!(registry.insert_station("RJTD", Coord::new(35.69, 139.69, "RJTD")));
    assert_eq!(registry.count(ReferenceTable::Stations), 2);
}
