//! AIRMET/SIGMET advisory parser
//!
//! This module turns a raw advisory string into an [`AdvisoryRecord`]. The
//! report is normalized into a token buffer which each decoder consumes
//! destructively, so a token is claimed by exactly one field.
//!
//! # Architecture
//!
//! - `normalizer`: whitespace collapsing and marker substitution
//! - `tokens`: the ordered token buffer shared by every decoder
//! - `header`: bulletin code, issuing office, issuance time, correction
//! - `spacetime`: area code, advisory type label and validity window
//! - `region`: FIR/CTA or state-list region name
//! - `observation`: current/forecast split and the per-observation extractors
//! - `altitude`: floor and ceiling decoding
//! - `field_parsers`: single-token timestamp and coordinate helpers
//! - `parser`: orchestration and record assembly
//!
//! Spatial references in the body are handed to
//! [`spatial_resolver`](crate::app::services::spatial_resolver).
//!
//! [`AdvisoryRecord`]: crate::app::models::AdvisoryRecord

pub mod altitude;
pub mod field_parsers;
pub mod header;
pub mod normalizer;
pub mod observation;
pub mod parser;
pub mod region;
pub mod spacetime;
pub mod tokens;

#[cfg(test)]
pub mod tests;

pub use normalizer::sanitize;
pub use observation::{ObservationExtractor, Observations};
pub use parser::AdvisoryParser;
pub use tokens::TokenBuffer;
