//! Field parsing utilities for report tokens
//!
//! Helpers that turn single tokens into timestamps, coordinates and numbers.
//! None of these consume tokens; callers decide what to remove.

use crate::app::models::{Coord, Timestamp};
use crate::constants::MONTH_SHIFT_HOUR_THRESHOLD;
use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, Utc};

/// Parse a `DDHHMM` or `HHMM` time token, optionally suffixed with `Z`
///
/// With `time_only` the token must be `HHMM`. When `issued` is supplied the
/// calendar value is resolved against it; otherwise only the day/time fields
/// are populated.
pub fn make_timestamp(raw: &str, time_only: bool, issued: Option<NaiveDate>) -> Option<Timestamp> {
    let digits = raw.trim_end_matches('Z');
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (day, hour, minute) = match digits.len() {
        4 => (None, &digits[0..2], &digits[2..4]),
        6 if !time_only => (Some(&digits[0..2]), &digits[2..4], &digits[4..6]),
        _ => return None,
    };
    let day = match day {
        Some(day) => Some(day.parse::<u32>().ok()?),
        None => None,
    };
    let hour = hour.parse::<u32>().ok()?;
    let minute = minute.parse::<u32>().ok()?;
    if hour > 24 || minute > 59 || day == Some(0) || day.is_some_and(|d| d > 31) {
        return None;
    }

    let dt = issued.and_then(|target| resolve_datetime(target, day, hour, minute));

    Some(Timestamp {
        repr: raw.to_string(),
        day,
        hour,
        minute,
        dt,
    })
}

/// Anchor day/hour/minute fields to the issued date
///
/// Hour 24 rolls over to the next day. A result more than
/// [`MONTH_SHIFT_HOUR_THRESHOLD`] hours from the issued date is moved one
/// month toward it, unless the month was already shifted because the day
/// does not exist in the issued month.
pub fn resolve_datetime(
    issued: NaiveDate,
    day: Option<u32>,
    hour: u32,
    minute: u32,
) -> Option<DateTime<Utc>> {
    let target = issued.and_hms_opt(0, 0, 0)?.and_utc();
    let day = day.unwrap_or(issued.day());

    let mut month_start = issued.with_day(1)?;
    let mut shifted = false;
    if day > days_in_month(month_start)? {
        month_start = month_start.checked_sub_months(Months::new(1))?;
        shifted = true;
    }

    let date = NaiveDate::from_ymd_opt(month_start.year(), month_start.month(), day)?;
    let mut guess = date.and_hms_opt(hour % 24, minute, 0)?.and_utc();
    if hour > 23 {
        guess += TimeDelta::days(1);
    }

    if !shifted {
        let hour_diff = (guess - target).num_hours();
        if hour_diff > MONTH_SHIFT_HOUR_THRESHOLD {
            guess = guess.checked_sub_months(Months::new(1))?;
        } else if hour_diff < -MONTH_SHIFT_HOUR_THRESHOLD {
            guess = guess.checked_add_months(Months::new(1))?;
        }
    }
    Some(guess)
}

fn days_in_month(month_start: NaiveDate) -> Option<u32> {
    let next = month_start.checked_add_months(Months::new(1))?;
    Some((next - month_start).num_days() as u32)
}

/// Whether a token is a hemisphere-prefixed coordinate literal such as
/// `N4409` or `E01506`
pub fn is_coord_literal(value: &str) -> bool {
    let mut chars = value.chars();
    let min_digits = match chars.next() {
        Some('N') | Some('S') => 2,
        Some('E') | Some('W') => 3,
        _ => return false,
    };
    let digits = chars.as_str();
    digits.len() >= min_digits && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a coordinate literal into decimal degrees
///
/// The first two (latitude) or three (longitude) digits are whole degrees
/// and the remaining digits are the fractional part, so `N4409` is 44.09
/// and `W09053` is -90.53.
pub fn coord_value(value: &str) -> Option<f64> {
    if !is_coord_literal(value) {
        return None;
    }
    let (hemisphere, digits) = value.split_at(1);
    let (whole_len, negative) = match hemisphere {
        "N" => (2, false),
        "S" => (2, true),
        "E" => (3, false),
        _ => (3, true),
    };
    let (whole, fraction) = digits.split_at(whole_len);
    let number = if fraction.is_empty() {
        whole.parse::<f64>().ok()?
    } else {
        format!("{}.{}", whole, fraction).parse::<f64>().ok()?
    };
    Some(if negative { -number } else { number })
}

/// Build a coordinate from a latitude and longitude literal pair
pub fn make_coord(lat: &str, lon: &str) -> Option<Coord> {
    Some(Coord::new(
        coord_value(lat)?,
        coord_value(lon)?,
        format!("{} {}", lat, lon),
    ))
}

/// Split a token into its leading digits and the remainder
pub fn split_digits(value: &str) -> (&str, &str) {
    let index = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value.split_at(index)
}

/// Whether the token starts with at least four digits
pub fn starts_with_time_digits(value: &str) -> bool {
    value.len() >= 4 && value.as_bytes()[..4].iter().all(u8::is_ascii_digit)
}
