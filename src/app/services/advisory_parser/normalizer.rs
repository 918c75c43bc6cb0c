//! Report text normalization
//!
//! Sanitizing collapses whitespace and strips the end-of-message marker.
//! Preparing additionally swaps punctuation for marker tokens so later
//! stages can find ellipses and sentence breaks as ordinary tokens.

use super::tokens::TokenBuffer;
use crate::constants::FLAGS;

/// Sanitize an AIRMET/SIGMET report string
///
/// Collapses every whitespace run to a single space and strips surrounding
/// spaces and `=` terminators. Idempotent.
pub fn sanitize(report: &str) -> String {
    let collapsed = report.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| c == ' ' || c == '=')
        .to_string()
}

/// Substitute marker tokens into sanitized text and split it into tokens
pub fn prepare(sanitized: &str) -> TokenBuffer {
    let mut report = sanitized.trim_end_matches('.').to_string();
    for (find, replace) in FLAGS {
        report = report.replace(find, replace);
    }
    TokenBuffer::from_text(&report)
}

/// Whether a token is a marker inserted by [`prepare`]
pub fn is_marker(token: &str) -> bool {
    token.starts_with('<')
}

/// Drop marker tokens
pub fn clean_flags(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| !is_marker(token))
        .cloned()
        .collect()
}
