//! Vertical extent decoding
//!
//! Four forms are recognized, checked token by token in this order:
//! `BTN <floor> AND <ceiling>`, a ceiling marker (`TOP`, `TOPS`, `BLW`)
//! followed by `ABV <value>` or an optional `TO` and a value, a combined
//! `<floor>/<ceiling>` token, and a bare altitude token taken as the ceiling.

use super::tokens::TokenBuffer;
use crate::app::models::{Altitude, AltitudeReference};
use crate::constants::{
    ABOVE_MARKER, AND_MARKER, BETWEEN_MARKER, CEILING_MARKERS, FEET_SUFFIX, FLIGHT_LEVEL_PREFIX,
    SURFACE, TO_MARKER,
};

/// Floor and ceiling claimed from a token buffer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalExtent {
    pub floor: Option<Altitude>,
    pub ceiling: Option<Altitude>,
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Whether a token looks like an altitude on its own
pub fn is_altitude(value: &str) -> bool {
    if value.len() < 5 || !value.is_ascii() {
        return false;
    }
    if value.starts_with("SFC/") {
        return true;
    }
    if value.starts_with(FLIGHT_LEVEL_PREFIX) && all_digits(&value[2..5]) {
        return true;
    }
    let first = value.split('/').next().unwrap_or_default();
    first.len() >= 5
        && first.ends_with(FEET_SUFFIX)
        && all_digits(&first[first.len() - 5..first.len() - 2])
}

/// Decode a single altitude value
///
/// Bare numbers of up to three digits are hundreds of feet and are read as
/// flight levels, as are all bare numbers when `force_flight_level` is set.
pub fn make_altitude(value: &str, force_flight_level: bool) -> Option<Altitude> {
    let reference = if value == SURFACE {
        AltitudeReference::Surface
    } else if let Some(feet) = value.strip_suffix(FEET_SUFFIX) {
        if !all_digits(feet) {
            return None;
        }
        AltitudeReference::Feet(feet.parse().ok()?)
    } else if let Some(level) = value.strip_prefix(FLIGHT_LEVEL_PREFIX) {
        if !all_digits(level) {
            return None;
        }
        AltitudeReference::FlightLevel(level.parse().ok()?)
    } else if all_digits(value) {
        let number = value.parse().ok()?;
        if force_flight_level || value.len() <= 3 {
            AltitudeReference::FlightLevel(number)
        } else {
            AltitudeReference::Feet(number)
        }
    } else {
        return None;
    };

    Some(Altitude {
        repr: value.to_string(),
        reference,
        above: false,
    })
}

/// Claim the first altitude form found in the buffer
pub fn extract_altitudes(tokens: &mut TokenBuffer) -> VerticalExtent {
    for i in 0..tokens.len() {
        let Some(item) = tokens.get(i) else { break };

        if item == BETWEEN_MARKER && tokens.get(i + 2) == Some(AND_MARKER) {
            let floor = tokens.get(i + 1).and_then(|v| make_altitude(v, false));
            let ceiling = tokens.get(i + 3).and_then(|v| make_altitude(v, false));
            if floor.is_some() && ceiling.is_some() {
                tokens.remove_range(i..i + 4);
                return VerticalExtent { floor, ceiling };
            }
            continue;
        }

        if CEILING_MARKERS.contains(&item) {
            if let Some(ceiling) = ceiling_after_marker(tokens, i) {
                return VerticalExtent {
                    floor: None,
                    ceiling: Some(ceiling),
                };
            }
            continue;
        }

        if is_altitude(item) {
            let extent = match item.split_once('/') {
                Some((floor, ceiling)) => {
                    let floor_is_reference =
                        floor == SURFACE || floor.starts_with(FLIGHT_LEVEL_PREFIX);
                    let ceiling_is_bare = !ceiling.starts_with(FLIGHT_LEVEL_PREFIX)
                        && !ceiling.ends_with(FEET_SUFFIX);
                    VerticalExtent {
                        floor: make_altitude(floor, false),
                        ceiling: make_altitude(ceiling, floor_is_reference && ceiling_is_bare),
                    }
                }
                None => VerticalExtent {
                    floor: None,
                    ceiling: make_altitude(item, false),
                },
            };
            tokens.remove(i);
            return extent;
        }
    }
    VerticalExtent::default()
}

/// Decode the value following a ceiling marker at `index`, removing the
/// marker and its value on success
fn ceiling_after_marker(tokens: &mut TokenBuffer, index: usize) -> Option<Altitude> {
    if tokens.get(index + 1) == Some(ABOVE_MARKER) {
        let value = tokens.get(index + 2)?;
        let mut ceiling = make_altitude(value, false)?;
        ceiling.repr = format!("{} {}", ABOVE_MARKER, value);
        ceiling.above = true;
        tokens.remove_range(index..index + 3);
        return Some(ceiling);
    }

    let value_index = if tokens.get(index + 1) == Some(TO_MARKER) {
        index + 2
    } else {
        index + 1
    };
    let ceiling = make_altitude(tokens.get(value_index)?, false)?;
    tokens.remove_range(index..value_index + 1);
    Some(ceiling)
}
