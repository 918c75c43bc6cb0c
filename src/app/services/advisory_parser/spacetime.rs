//! Area, report type and validity window decoding

use super::tokens::TokenBuffer;
use crate::constants::{AIRMET_REPEAT_MARKER, UNTIL_MARKER, VALID_MARKER};
use crate::{Error, Result};

/// Fields decoded between the header and the region name
#[derive(Debug, Clone, PartialEq)]
pub struct Spacetime {
    pub area: String,
    /// Every token preceding `VALID`, joined
    pub report_type: String,
    pub start_time: Option<String>,
    pub end_time: String,
    /// Originating station code with its trailing `-` removed
    pub station: Option<String>,
}

/// Consume the area code through the optional station code
pub fn parse_spacetime(tokens: &mut TokenBuffer) -> Result<Spacetime> {
    let mut area = tokens
        .remove(0)
        .ok_or_else(|| Error::malformed_header("no area code after header"))?;

    // Domestic AIRMETs repeat the advisory type and issue time after the area
    let is_repeat = tokens.first() == Some(AIRMET_REPEAT_MARKER)
        && tokens
            .get(1)
            .is_some_and(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()));
    if is_repeat {
        tokens.take_prefix(2);
        area.pop();
    }

    let valid_index = tokens
        .position(VALID_MARKER)
        .ok_or(Error::MissingValidityMarker)?;
    let report_type = tokens.take_prefix(valid_index).join(" ");
    tokens.remove(0);

    let (start_time, end_time) = if tokens.first() == Some(UNTIL_MARKER) {
        let end = tokens
            .get(1)
            .ok_or_else(|| Error::malformed_validity("no end time after UNTIL"))?
            .to_string();
        tokens.take_prefix(2);
        (None, end)
    } else {
        let window = tokens
            .remove(0)
            .ok_or_else(|| Error::malformed_validity("no window after VALID"))?;
        split_window(&window)
    };

    let station = if tokens.first().is_some_and(|t| t.ends_with('-')) {
        tokens
            .remove(0)
            .map(|token| token.trim_end_matches('-').to_string())
    } else {
        None
    };

    Ok(Spacetime {
        area,
        report_type,
        start_time,
        end_time,
        station,
    })
}

/// Split a `start-end` or `start/end` window. A token without either
/// separator is taken as the end time.
fn split_window(window: &str) -> (Option<String>, String) {
    let separator = if window.contains('-') { '-' } else { '/' };
    match window.split_once(separator) {
        Some((start, end)) => (Some(start.to_string()), end.to_string()),
        None => (None, window.to_string()),
    }
}
