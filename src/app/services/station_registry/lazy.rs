//! Registry loaded on first use
//!
//! The tables are read the first time a lookup happens and shared read-only
//! afterwards.

use super::{IdentResolver, LoadStats, StationRegistry};
use crate::app::models::Coord;
use crate::config::RegistryConfig;
use crate::{Error, Result};
use std::sync::OnceLock;
use tracing::{info, warn};

/// An [`IdentResolver`] that loads its [`StationRegistry`] on first lookup
#[derive(Debug)]
pub struct LazyRegistry {
    config: RegistryConfig,
    cell: OnceLock<std::result::Result<(StationRegistry, LoadStats), String>>,
}

impl LazyRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            cell: OnceLock::new(),
        }
    }

    /// Whether the tables have been loaded (or failed to load)
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The loaded registry, loading it now if needed
    ///
    /// A failed load is remembered and reported again on every call.
    pub fn registry(&self) -> Result<&StationRegistry> {
        let loaded = self.cell.get_or_init(|| {
            info!("Loading ident registry on first lookup");
            let (registry, stats) =
                StationRegistry::load(&self.config).map_err(|e| e.to_string())?;
            info!("{}", registry.metadata().summary());
            if stats.has_errors() {
                warn!(
                    "{} reference rows rejected ({:.1}% of rows not loaded)",
                    stats.errors.len(),
                    stats.rejection_rate()
                );
            }
            Ok((registry, stats))
        });
        match loaded {
            Ok((registry, _)) => Ok(registry),
            Err(message) => Err(Error::station_registry(message.clone())),
        }
    }

    /// Load statistics, if the tables loaded successfully
    pub fn load_stats(&self) -> Option<&LoadStats> {
        match self.cell.get() {
            Some(Ok((_, stats))) => Some(stats),
            _ => None,
        }
    }
}

impl IdentResolver for LazyRegistry {
    fn candidates(&self, ident: &str) -> Result<Vec<Coord>> {
        self.registry()?.candidates(ident)
    }
}
