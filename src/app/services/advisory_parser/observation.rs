//! Observation extraction
//!
//! A report body holds a current observation, a forecast, or both. Each one
//! is decoded by running the sub-extractors below in a fixed order over a
//! shrinking token buffer. Every extractor removes what it claims, so later
//! extractors never see those tokens.

use super::altitude::extract_altitudes;
use super::field_parsers::{
    is_coord_literal, make_coord, make_timestamp, split_digits, starts_with_time_digits,
};
use super::normalizer::clean_flags;
use super::tokens::TokenBuffer;
use crate::Result;
use crate::app::models::{
    Altitude, Code, Coord, Hazard, Intensity, Movement, Observation, Speed, Timestamp, Units,
};
use crate::app::services::spatial_resolver::extract_bounds;
use crate::app::services::station_registry::IdentResolver;
use crate::constants::{
    END_TIME_MARKERS, FORECAST_MARKERS, FORECAST_ONLY_THRESHOLD, INTENSITY, MOVEMENT_MARKER,
    OBSERVED_MARKER, POSITION_MARKER, SPEED_UNITS, STATIONARY_MARKER, TIME_MARKERS,
    TIME_SCAFFOLDING, WEATHER_TYPES,
};
use chrono::NaiveDate;
use std::ops::Range;
use tracing::debug;

/// Current and forecast observations decoded from one body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observations {
    pub current: Option<Observation>,
    pub forecast: Option<Observation>,
}

/// Decodes observations from the token stream left after the region name
pub struct ObservationExtractor<'a> {
    resolver: &'a dyn IdentResolver,
    issued: Option<NaiveDate>,
}

impl<'a> ObservationExtractor<'a> {
    pub fn new(resolver: &'a dyn IdentResolver, issued: Option<NaiveDate>) -> Self {
        Self { resolver, issued }
    }

    /// Split the body at its forecast marker and decode each part
    ///
    /// A marker within the first few tokens means the whole body is a
    /// forecast. `units` is shared by both parts.
    pub fn extract(&self, tokens: TokenBuffer, units: &mut Units) -> Result<Observations> {
        let observations = match tokens.first_index(FORECAST_MARKERS) {
            None => Observations {
                current: Some(self.observation(tokens, units)?),
                forecast: None,
            },
            Some(index) if index < FORECAST_ONLY_THRESHOLD => Observations {
                current: None,
                forecast: Some(self.observation(tokens, units)?),
            },
            Some(index) => {
                let (current, forecast) = tokens.split_at(index);
                Observations {
                    current: Some(self.observation(current, units)?),
                    forecast: Some(self.observation(forecast, units)?),
                }
            }
        };
        Ok(observations)
    }

    /// Decode a single observation
    pub fn observation(&self, mut tokens: TokenBuffer, units: &mut Units) -> Result<Observation> {
        let (start_time, end_time) = self.extract_time(&mut tokens);
        let position = extract_position(&mut tokens);

        let extent = extract_bounds(&tokens.join(), self.resolver)?;
        let mut tokens = TokenBuffer::from_text(&extent.remainder);

        let movement = extract_movement(&mut tokens, units);
        let intensity = extract_intensity(&mut tokens);
        let altitudes = extract_altitudes(&mut tokens);
        let weather = extract_weather(&mut tokens);

        debug!(
            "Decoded observation: weather={:?}, ceiling_ft={:?}, {} coords, {} leftover tokens",
            weather.as_ref().map(|w| &w.repr),
            altitudes.ceiling.as_ref().map(Altitude::feet),
            extent.coords.len(),
            tokens.len()
        );

        Ok(Observation {
            weather,
            start_time,
            end_time,
            position,
            floor: altitudes.floor,
            ceiling: altitudes.ceiling,
            coords: extent.coords,
            bounds: extent.bounds,
            movement,
            intensity,
            other: clean_flags(tokens.as_slice()),
        })
    }

    /// Claim the observation time following the first time marker
    ///
    /// The marker itself is always consumed. A `start-end` window fills both
    /// times; a single time is an end time after `UNTIL`/`VALID` and a start
    /// time otherwise. A time token that does not decode stays in the buffer.
    fn extract_time(&self, tokens: &mut TokenBuffer) -> (Option<Timestamp>, Option<Timestamp>) {
        let Some(index) = tokens.first_index(TIME_MARKERS) else {
            return (None, None);
        };
        let marker = tokens.remove(index).unwrap_or_default();

        let mut start = None;
        let mut end = None;
        let mut observed = None;
        match tokens.get(index).map(str::to_string) {
            Some(next) if is_time_window(&next) => {
                let window = next.split_once('-').and_then(|(first, last)| {
                    let first = make_timestamp(first, false, self.issued)?;
                    let last = make_timestamp(last, false, self.issued)?;
                    Some((first, last))
                });
                if let Some((first, last)) = window {
                    tokens.remove(index);
                    start = Some(first);
                    end = Some(last);
                }
            }
            Some(next) if starts_with_time_digits(&next) => {
                observed = make_timestamp(&next, true, self.issued)
                    .or_else(|| make_timestamp(&next, false, self.issued));
                if observed.is_some() {
                    tokens.remove(index);
                    if index > 0 && tokens.get(index - 1) == Some(OBSERVED_MARKER) {
                        tokens.remove(index - 1);
                    }
                }
            }
            _ => {}
        }

        for scaffolding in TIME_SCAFFOLDING {
            tokens.remove_token(scaffolding);
        }

        if observed.is_some() {
            if END_TIME_MARKERS.contains(&marker.as_str()) {
                end = observed;
            } else {
                start = observed;
            }
        }
        (start, end)
    }
}

/// `DDHHMM-DDHHMM` style window
fn is_time_window(value: &str) -> bool {
    value.split_once('-').is_some_and(|(first, last)| {
        starts_with_time_digits(first) && starts_with_time_digits(last)
    })
}

/// Claim a `PSN <lat> <lon>` point position
fn extract_position(tokens: &mut TokenBuffer) -> Option<Coord> {
    let index = tokens.position(POSITION_MARKER)?;
    let lat = tokens.get(index + 1)?;
    let lon = tokens.get(index + 2)?;
    let lat_ok = lat.starts_with(['N', 'S']) && is_coord_literal(lat);
    let lon_ok = lon.starts_with(['E', 'W']) && is_coord_literal(lon);
    if !lat_ok || !lon_ok {
        return None;
    }
    let coord = make_coord(lat, lon)?;
    tokens.remove_range(index..index + 3);
    Some(coord)
}

/// Claim `STNR` or `MOV <direction> [<speed><unit>]`
///
/// A recognized speed unit updates the shared wind speed unit.
fn extract_movement(tokens: &mut TokenBuffer, units: &mut Units) -> Option<Movement> {
    if tokens.remove_token(STATIONARY_MARKER) {
        return Some(Movement {
            repr: STATIONARY_MARKER.to_string(),
            direction: None,
            speed: Some(Speed {
                repr: STATIONARY_MARKER.to_string(),
                value: 0,
                unit: units.wind_speed,
            }),
            stationary: true,
        });
    }

    let index = tokens.position(MOVEMENT_MARKER)?;
    let mut repr = tokens.remove(index)?;
    let direction = tokens.remove(index);
    if let Some(direction) = &direction {
        repr = format!("{} {}", repr, direction);
    }

    let speed = tokens.get(index).and_then(parse_speed);
    if let Some(speed) = &speed {
        units.wind_speed = speed.unit;
        repr = format!("{} {}", repr, speed.repr);
        tokens.remove(index);
    }

    Some(Movement {
        repr,
        direction,
        speed,
        stationary: false,
    })
}

/// Parse a `25KT` / `40KMH` speed token
fn parse_speed(value: &str) -> Option<Speed> {
    let (digits, suffix) = split_digits(value);
    let unit = SPEED_UNITS
        .iter()
        .find(|(code, _)| *code == suffix)
        .map(|(_, unit)| *unit)?;
    Some(Speed {
        repr: value.to_string(),
        value: digits.parse().ok()?,
        unit,
    })
}

/// Claim a trailing intensity code
fn extract_intensity(tokens: &mut TokenBuffer) -> Option<Code<Intensity>> {
    let last = tokens.last()?;
    let value = INTENSITY
        .iter()
        .find(|(code, _)| *code == last)
        .map(|(_, value)| *value)?;
    let repr = tokens.pop()?;
    Some(Code::new(repr, value))
}

/// Claim the first hazard phrase from the table found anywhere in the text
///
/// A phrase may be glued to punctuation, as in `SEV ICE(FZRA)` or
/// `EMBD TS/CB`, but not to letters or digits. Every such occurrence is cut
/// out and the rest is re-tokenized.
fn extract_weather(tokens: &mut TokenBuffer) -> Option<Code<Hazard>> {
    let report = tokens.join();
    let (phrase, hazard, spans) = WEATHER_TYPES.iter().find_map(|(phrase, hazard)| {
        let spans = phrase_spans(&report, phrase);
        (!spans.is_empty()).then_some((*phrase, *hazard, spans))
    })?;

    let mut rest = String::with_capacity(report.len());
    let mut cursor = 0;
    for span in spans {
        rest.push_str(&report[cursor..span.start]);
        cursor = span.end;
    }
    rest.push_str(&report[cursor..]);
    *tokens = TokenBuffer::from_text(&rest);

    Some(Code::new(phrase, hazard))
}

/// Byte ranges where `phrase` occurs with no alphanumeric neighbour
fn phrase_spans(report: &str, phrase: &str) -> Vec<Range<usize>> {
    let glued = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
    report
        .match_indices(phrase)
        .map(|(start, _)| start..start + phrase.len())
        .filter(|span| {
            !glued(report[..span.start].chars().next_back())
                && !glued(report[span.end..].chars().next())
        })
        .collect()
}
