//! Spatial reference patterns and span scanning
//!
//! Three passes run over the report text in a fixed order: lateral clauses,
//! coordinate literals, then navaid references. Each pass masks what it
//! claims with spaces so later passes cannot match the same characters, and
//! masking keeps every byte offset stable. Only text before the first
//! sentence break is scanned.

use crate::app::models::Coord;
use crate::app::services::advisory_parser::field_parsers::{make_coord, split_digits};
use crate::constants::cardinal_degrees;
use regex::Regex;
use std::sync::LazyLock;

/// `N OF N2050 AND`, `E OF E01506`
static LATERAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[NS] OF [NS]\d{4}|[EW] OF [EW]\d{5})(?: AND)?\b")
        .expect("valid lateral clause regex")
});

/// `N1429 W09053 -`
static COORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[NS]\d{4} [EW]\d{5}\b(?: -)?").expect("valid coordinate literal regex")
});

/// `30SSW BNA`, `FROM ISN`, `TO FAR`, `-INL`
static NAVAID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,3}[NESW]{1,3} [A-Za-z]{3}\b|(?:-|TO |FROM )[A-Za-z]{3}\b")
        .expect("valid navaid reference regex")
});

const BREAK_SEPARATOR: &str = " <break> ";

/// Distance and bearing offset from a navaid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub distance_nm: f64,
    pub bearing: f64,
}

/// A navaid reference, optionally offset by a vector
#[derive(Debug, Clone, PartialEq)]
pub struct NavaidRef {
    /// Reference text without leading `-`, `FROM` or `TO`
    pub repr: String,
    pub ident: String,
    pub vector: Option<Vector>,
}

impl NavaidRef {
    /// Decode a navaid match such as `FROM 30SSW BNA` or `-INL`
    pub fn parse(text: &str) -> Option<Self> {
        let repr = text
            .trim_matches('-')
            .trim_start_matches("FROM ")
            .trim_start_matches("TO ")
            .to_string();

        let mut parts = repr.split_whitespace();
        let (vector, ident) = match (parts.next()?, parts.next()) {
            (vector, Some(ident)) => {
                let (digits, point) = split_digits(vector);
                let vector = Vector {
                    distance_nm: digits.parse().ok()?,
                    bearing: cardinal_degrees(point)?,
                };
                (Some(vector), ident)
            }
            (ident, None) => (None, ident),
        };

        Some(Self {
            ident: ident.to_uppercase(),
            repr: repr.clone(),
            vector,
        })
    }
}

/// What a span decodes to
#[derive(Debug, Clone, PartialEq)]
pub enum SpanKind {
    /// Lateral clause kept verbatim
    Lateral(String),
    Coordinate(Coord),
    Navaid(NavaidRef),
}

/// A claimed region of the report text
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub kind: SpanKind,
}

/// Result of scanning a report
#[derive(Debug, Clone, PartialEq)]
pub struct SpanScan {
    /// Claimed spans ordered by start offset
    pub spans: Vec<Span>,
    /// The report with every claimed span replaced by spaces
    pub masked: String,
}

/// Run all three passes over the report
pub fn scan(report: &str) -> SpanScan {
    let scope_end = report.find(BREAK_SEPARATOR).unwrap_or(report.len());
    let mut working = report[..scope_end].to_string();
    let mut spans = Vec::new();

    claim(&mut working, &mut spans, &LATERAL_PATTERN, |text| {
        Some(SpanKind::Lateral(
            text.strip_suffix(" AND").unwrap_or(text).to_string(),
        ))
    });
    claim(&mut working, &mut spans, &COORD_PATTERN, |text| {
        let mut parts = text.trim_end_matches([' ', '-']).split_whitespace();
        let coord = make_coord(parts.next()?, parts.next()?)?;
        Some(SpanKind::Coordinate(coord))
    });
    claim(&mut working, &mut spans, &NAVAID_PATTERN, |text| {
        NavaidRef::parse(text).map(SpanKind::Navaid)
    });

    spans.sort_by_key(|span| span.start);
    working.push_str(&report[scope_end..]);
    SpanScan {
        spans,
        masked: working,
    }
}

/// Claim every decodable match of `pattern`, masking it in `working`
fn claim<F>(working: &mut String, spans: &mut Vec<Span>, pattern: &Regex, decode: F)
where
    F: Fn(&str) -> Option<SpanKind>,
{
    let found: Vec<Span> = pattern
        .find_iter(working)
        .filter_map(|m| {
            let kind = decode(m.as_str())?;
            Some(Span {
                start: m.start(),
                end: m.end(),
                text: m.as_str().to_string(),
                kind,
            })
        })
        .collect();

    for span in &found {
        working.replace_range(span.start..span.end, &" ".repeat(span.end - span.start));
    }
    spans.extend(found);
}
