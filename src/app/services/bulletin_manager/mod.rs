//! Bulletin fetching and snapshot management
//!
//! Sources deliver raw advisory text; the manager fetches every source
//! concurrently, parses the results in declared source order and keeps the
//! latest snapshot so callers can tell whether anything changed.
//!
//! # Architecture
//!
//! - [`BulletinSource`]: async trait implemented by anything that can deliver bulletins
//! - [`FileBulletinSource`]: reads bulletins from files matching a glob pattern
//! - [`AirSigManager`]: fetch, parse, compare and replace cycle
//!
//! A single failed fetch aborts the cycle and the previous snapshot is kept.

pub mod file_source;

#[cfg(test)]
mod tests;

pub use file_source::{FileBulletinSource, split_bulletins};

use crate::Result;
use crate::app::models::AdvisoryRecord;
use crate::app::services::advisory_parser::AdvisoryParser;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use futures::future::try_join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

/// A provider of raw advisory text blocks
#[async_trait]
pub trait BulletinSource: Send + Sync {
    /// Name used to tag reports from this source
    fn name(&self) -> &str;

    /// Fetch every bulletin currently published by the source
    ///
    /// An unavailable source is an error, never an empty list.
    async fn fetch(&self) -> Result<Vec<String>>;
}

/// A decoded report tagged with the source it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirSigmetReport {
    pub source: String,
    pub data: AdvisoryRecord,
}

/// Outcome counts of the most recent update cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateStats {
    pub bulletins_fetched: usize,
    pub reports_parsed: usize,
    pub reports_skipped: usize,
}

/// Fetches, parses and tracks the current set of AIRMET/SIGMET reports
pub struct AirSigManager {
    sources: Vec<Box<dyn BulletinSource>>,
    parser: AdvisoryParser,
    issued: Option<NaiveDate>,
    reports: Option<Vec<AirSigmetReport>>,
    last_stats: UpdateStats,
    last_updated: Option<DateTime<Utc>>,
}

impl AirSigManager {
    /// Sources are merged in the order given here
    pub fn new(sources: Vec<Box<dyn BulletinSource>>, parser: AdvisoryParser) -> Self {
        Self {
            sources,
            parser,
            issued: None,
            reports: None,
            last_stats: UpdateStats::default(),
            last_updated: None,
        }
    }

    /// Anchor parsed timestamps to an issued date
    pub fn with_issued(mut self, issued: NaiveDate) -> Self {
        self.issued = Some(issued);
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Current snapshot, `None` until the first successful update
    pub fn reports(&self) -> Option<&[AirSigmetReport]> {
        self.reports.as_deref()
    }

    pub fn last_stats(&self) -> &UpdateStats {
        &self.last_stats
    }

    /// Time of the last update that replaced the snapshot
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Run one fetch and parse cycle, returning whether the snapshot changed
    ///
    /// Reports that fail to parse are skipped with a warning. A fetch failure
    /// from any source returns the error and leaves the snapshot untouched.
    pub async fn update(&mut self) -> Result<bool> {
        info!("Fetching bulletins from {} sources", self.sources.len());
        let fetched = try_join_all(self.sources.iter().map(|source| source.fetch())).await?;

        let mut stats = UpdateStats::default();
        let mut reports = Vec::new();
        for (source, bulletins) in self.sources.iter().zip(fetched) {
            debug!("Source '{}' delivered {} bulletins", source.name(), bulletins.len());
            stats.bulletins_fetched += bulletins.len();
            for bulletin in bulletins {
                match self.parser.parse(&bulletin, self.issued) {
                    Ok(data) => reports.push(AirSigmetReport {
                        source: source.name().to_string(),
                        data,
                    }),
                    Err(e) => {
                        warn!("Skipping report from '{}': {}", source.name(), e);
                        stats.reports_skipped += 1;
                    }
                }
            }
        }
        stats.reports_parsed = reports.len();

        let changed = self.reports.as_ref() != Some(&reports);
        if changed {
            self.reports = Some(reports);
            self.last_updated = Some(Utc::now());
        }
        info!(
            "Update complete: {} parsed, {} skipped, changed={}",
            stats.reports_parsed, stats.reports_skipped, changed
        );
        self.last_stats = stats;
        Ok(changed)
    }
}
