//! Test utilities and mock infrastructure for spatial resolution testing

use crate::Result;
use crate::app::models::Coord;
use crate::app::services::station_registry::IdentResolver;
use std::collections::HashMap;
use std::sync::Mutex;


/// In-memory ident resolver that records every lookup
#[derive(Debug, Default)]
pub struct MockResolver {
    entries: HashMap<String, Vec<Coord>>,
    lookups: Mutex<Vec<String>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate location for an ident
    pub fn with(mut self, ident: &str, lat: f64, lon: f64) -> Self {
        self.entries
            .entry(ident.to_string())
            .or_default()
            .push(Coord::new(lat, lon, ident));
        self
    }

    /// Idents looked up so far, in order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl IdentResolver for MockResolver {
    fn candidates(&self, ident: &str) -> Result<Vec<Coord>> {
        self.lookups.lock().unwrap().push(ident.to_string());
        Ok(self.entries.get(ident).cloned().unwrap_or_default())
    }
}

/// Resolver with the navaids used across the scenarios
pub fn create_test_resolver() -> MockResolver {
    MockResolver::new()
        .with("BNA", 36.12, -86.68)
        .with("ISN", 48.18, -103.64)
        .with("INL", 48.57, -93.40)
        .with("TVC", 44.67, -85.55)
        .with("ROD", 40.29, -84.04)
        .with("CVG", 39.02, -84.70)
        // ABC is shared by two distant navaids
        .with("ABC", 40.0, -100.0)
        .with("ABC", 10.0, 20.0)
}

/// Assert two coordinates are within `tolerance` degrees
pub fn assert_near(actual: &Coord, lat: f64, lon: f64, tolerance: f64) {
    assert!(
        (actual.lat - lat).abs() < tolerance && (actual.lon - lon).abs() < tolerance,
        "expected ({}, {}), got ({}, {})",
        lat,
        lon,
        actual.lat,
        actual.lon
    );
}
