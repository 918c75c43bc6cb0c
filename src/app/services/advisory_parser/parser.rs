//! Parse orchestration
//!
//! Runs the decoders in order over one report and assembles the record.
//! The first decoder failure aborts the whole parse.

use super::field_parsers::make_timestamp;
use super::header::parse_header;
use super::normalizer::{is_marker, prepare, sanitize};
use super::observation::ObservationExtractor;
use super::region::parse_region;
use super::spacetime::parse_spacetime;
use super::tokens::TokenBuffer;
use crate::Result;
use crate::app::models::{AdvisoryRecord, Units};
use crate::app::services::station_registry::IdentResolver;
use crate::constants::{AIRMET_LABEL, ELLIPSIS_MARKER};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

/// AIRMET/SIGMET decoder bound to an ident resolver
///
/// The parser holds no per-report state, so one instance can be shared
/// across threads and reused for any number of reports.
#[derive(Clone)]
pub struct AdvisoryParser {
    resolver: Arc<dyn IdentResolver>,
}

impl std::fmt::Debug for AdvisoryParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryParser").finish_non_exhaustive()
    }
}

impl AdvisoryParser {
    pub fn new(resolver: Arc<dyn IdentResolver>) -> Self {
        Self { resolver }
    }

    /// Decode a single report
    ///
    /// `issued` anchors day/time-only timestamps to a calendar date. Without
    /// it those timestamps keep only their day and time fields.
    pub fn parse(&self, report: &str, issued: Option<NaiveDate>) -> Result<AdvisoryRecord> {
        let sanitized = sanitize(report);
        let mut tokens = prepare(&sanitized);

        let header = parse_header(&mut tokens)?;
        let spacetime = parse_spacetime(&mut tokens)?;

        if tokens.first() == Some(AIRMET_LABEL) {
            if let Some(index) = tokens.position(ELLIPSIS_MARKER) {
                tokens.truncate(index);
            }
        }

        let region = parse_region(&mut tokens);
        let body = locate_body(&sanitized, &tokens);
        debug!(
            "Decoded {} {} header, region '{}', {} body tokens",
            header.bulletin.repr,
            header.issuer,
            region,
            tokens.len()
        );

        let mut units = Units::default();
        let extractor = ObservationExtractor::new(self.resolver.as_ref(), issued);
        let observations = extractor.extract(tokens, &mut units)?;

        Ok(AdvisoryRecord {
            raw: report.to_string(),
            station: spacetime.station,
            time: make_timestamp(&header.time, false, issued),
            bulletin: header.bulletin,
            issuer: header.issuer,
            correction: header.correction,
            area: spacetime.area,
            report_type: spacetime.report_type,
            start_time: spacetime
                .start_time
                .as_deref()
                .and_then(|raw| make_timestamp(raw, false, issued)),
            end_time: make_timestamp(&spacetime.end_time, false, issued),
            body,
            region,
            observation: observations.current,
            forecast: observations.forecast,
            units,
            sanitized,
        })
    }

    /// Decode a batch, keeping each report's outcome separate
    pub fn parse_all<'r>(
        &self,
        reports: impl IntoIterator<Item = &'r str>,
        issued: Option<NaiveDate>,
    ) -> Vec<Result<AdvisoryRecord>> {
        reports
            .into_iter()
            .map(|report| self.parse(report, issued))
            .collect()
    }
}

/// Header portion of the sanitized text preceding the remaining tokens
///
/// The remaining stream is located by its first two non-marker tokens, or
/// its first token when the pair was split by punctuation in the source.
/// Returns the whole text when the stream cannot be located.
fn locate_body(sanitized: &str, tokens: &TokenBuffer) -> String {
    let words: Vec<&str> = tokens
        .as_slice()
        .iter()
        .map(String::as_str)
        .filter(|token| !is_marker(token))
        .take(2)
        .collect();
    if words.is_empty() {
        return sanitized.to_string();
    }

    let index = sanitized
        .find(&words.join(" "))
        .or_else(|| sanitized.find(words[0]));
    match index {
        Some(index) => sanitized[..index].trim_end().to_string(),
        None => sanitized.to_string(),
    }
}
