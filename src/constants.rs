//! Application constants for the AIRMET/SIGMET decoder
//!
//! This module contains the fixed code tables, marker tokens, and numeric
//! constants used throughout the decoder. All tables are immutable and
//! ordered where order matters.

use crate::app::models::{BulletinType, Hazard, Intensity, SpeedUnit};

// =============================================================================
// Bulletin Header Tables
// =============================================================================

/// Two-letter WMO bulletin type prefixes
pub const BULLETIN_TYPES: &[(&str, BulletinType)] = &[
    ("WA", BulletinType::Airmet),
    ("WS", BulletinType::Sigmet),
    ("WC", BulletinType::TropicalCycloneSigmet),
    ("WV", BulletinType::VolcanicAshSigmet),
];

/// Minimum length of the bulletin code token (type + country + sequence)
pub const MIN_BULLETIN_CODE_LEN: usize = 6;

/// Length of the optional correction token following the issuance time
pub const CORRECTION_TOKEN_LEN: usize = 3;

/// Repeated advisory type marker on domestic AIRMET area lines
pub const AIRMET_REPEAT_MARKER: &str = "WA";

/// Leading body token identifying a domestic AIRMET
pub const AIRMET_LABEL: &str = "AIRMET";

// =============================================================================
// Normalizer Flags
// =============================================================================

/// Ellipsis marker token inserted by the normalizer
pub const ELLIPSIS_MARKER: &str = "<elip>";

/// Sentence break marker token inserted by the normalizer
pub const BREAK_MARKER: &str = "<break>";

/// Literal substitutions applied before tokenizing. Order matters: the
/// three-dot ellipsis must be replaced before the two-dot form.
pub const FLAGS: &[(&str, &str)] = &[
    ("...", " <elip> "),
    ("..", " <elip> "),
    (". ", " <break> "),
    ("/VIS ", " <vis> VIS "),
];

// =============================================================================
// Marker Tokens
// =============================================================================

/// Validity window marker
pub const VALID_MARKER: &str = "VALID";

/// Open-start validity marker
pub const UNTIL_MARKER: &str = "UNTIL";

/// Region name terminators, in priority order
pub const REGION_MARKERS: &[&str] = &["FIR", "CTA", "FROM"];

/// Region terminator that is left in the token stream
pub const FROM_MARKER: &str = "FROM";

/// Forecast section markers, in priority order
pub const FORECAST_MARKERS: &[&str] = &["FCST", "OUTLOOK"];

/// A forecast marker within this many leading tokens makes the whole body a forecast
pub const FORECAST_ONLY_THRESHOLD: usize = 6;

/// Observation time markers, in priority order
pub const TIME_MARKERS: &[&str] = &["AT", "FCST", "UNTIL", "VALID", "OUTLOOK"];

/// Markers removed from an observation once its time has been extracted
pub const TIME_SCAFFOLDING: &[&str] = &["FCST", "OUTLOOK", "VALID"];

/// Time markers whose observed time is an end time
pub const END_TIME_MARKERS: &[&str] = &["UNTIL", "VALID"];

/// Observed marker preceding an observation time
pub const OBSERVED_MARKER: &str = "OBS";

/// Position marker preceding a point coordinate
pub const POSITION_MARKER: &str = "PSN";

/// Stationary movement token
pub const STATIONARY_MARKER: &str = "STNR";

/// Movement marker preceding direction and speed
pub const MOVEMENT_MARKER: &str = "MOV";

/// Speed unit suffixes recognized on movement speeds
pub const SPEED_UNITS: &[(&str, SpeedUnit)] = &[
    ("KMH", SpeedUnit::KilometersPerHour),
    ("KT", SpeedUnit::Knots),
];

// =============================================================================
// Altitude Tokens
// =============================================================================

/// Altitude range marker: `BTN <floor> AND <ceiling>`
pub const BETWEEN_MARKER: &str = "BTN";

/// Conjunction inside a `BTN` range
pub const AND_MARKER: &str = "AND";

/// Ceiling-only markers
pub const CEILING_MARKERS: &[&str] = &["TOP", "TOPS", "BLW"];

/// Unbounded-above marker
pub const ABOVE_MARKER: &str = "ABV";

/// Optional filler between a ceiling marker and its value
pub const TO_MARKER: &str = "TO";

/// Surface altitude literal
pub const SURFACE: &str = "SFC";

/// Flight level prefix
pub const FLIGHT_LEVEL_PREFIX: &str = "FL";

/// Feet suffix
pub const FEET_SUFFIX: &str = "FT";

// =============================================================================
// Code Tables
// =============================================================================

/// Trailing intensity/trend codes
pub const INTENSITY: &[(&str, Intensity)] = &[
    ("NC", Intensity::NoChange),
    ("WKN", Intensity::Weakening),
    ("INTSF", Intensity::Intensifying),
];

/// Weather hazard phrases. First match wins, so longer phrases sharing a
/// prefix or suffix with a shorter one must come first.
pub const WEATHER_TYPES: &[(&str, Hazard)] = &[
    ("ISOL TSGR", Hazard::IsolatedThunderstormsHail),
    ("OCNL TSGR", Hazard::OccasionalThunderstormsHail),
    ("FRQ TSGR", Hazard::FrequentThunderstormsHail),
    ("EMBD TSGR", Hazard::EmbeddedThunderstormsHail),
    ("OBSC TSGR", Hazard::ObscuredThunderstormsHail),
    ("SQL TSGR", Hazard::SquallLineThunderstormsHail),
    ("ISOL TS", Hazard::IsolatedThunderstorms),
    ("ISOLD TS", Hazard::IsolatedThunderstorms),
    ("OCNL TS", Hazard::OccasionalThunderstorms),
    ("FRQ TS", Hazard::FrequentThunderstorms),
    ("EMBD TS", Hazard::EmbeddedThunderstorms),
    ("OBSC TS", Hazard::ObscuredThunderstorms),
    ("SQL TS", Hazard::SquallLineThunderstorms),
    ("ISOL CB", Hazard::Cumulonimbus),
    ("OCNL CB", Hazard::Cumulonimbus),
    ("FRQ CB", Hazard::Cumulonimbus),
    ("TC", Hazard::TropicalCyclone),
    ("SEV TURB", Hazard::SevereTurbulence),
    ("SEV ICE (FZRA)", Hazard::SevereIcingFreezingRain),
    ("SEV ICE", Hazard::SevereIcing),
    ("SEV MTW", Hazard::SevereMountainWave),
    ("HVY DS", Hazard::HeavyDuststorm),
    ("HVY SS", Hazard::HeavySandstorm),
    ("RDOACT CLD", Hazard::RadioactiveCloud),
    ("VA ERUPTION", Hazard::VolcanicAsh),
    ("VA CLD", Hazard::VolcanicAsh),
    ("VA", Hazard::VolcanicAsh),
    ("MOD TURB", Hazard::ModerateTurbulence),
    ("MOD ICE", Hazard::ModerateIcing),
    ("MOD MTW", Hazard::ModerateMountainWave),
    ("MTN OBSCN", Hazard::MountainObscuration),
    ("MTN OBSC", Hazard::MountainObscuration),
    ("STG SFC WND", Hazard::StrongSurfaceWind),
    ("SFC WND", Hazard::StrongSurfaceWind),
    ("SFC VIS", Hazard::ReducedVisibility),
    ("LLWS", Hazard::LowLevelWindShear),
    ("IFR", Hazard::InstrumentConditions),
    ("BKN CLD", Hazard::BrokenCloud),
    ("OVC CLD", Hazard::OvercastCloud),
    ("TURB", Hazard::Turbulence),
    ("ICE", Hazard::Icing),
    ("TS", Hazard::Thunderstorms),
];

/// 16-point compass rose in degrees true
pub const CARDINAL_DEGREES: &[(&str, f64)] = &[
    ("N", 0.0),
    ("NNE", 22.5),
    ("NE", 45.0),
    ("ENE", 67.5),
    ("E", 90.0),
    ("ESE", 112.5),
    ("SE", 135.0),
    ("SSE", 157.5),
    ("S", 180.0),
    ("SSW", 202.5),
    ("SW", 225.0),
    ("WSW", 247.5),
    ("W", 270.0),
    ("WNW", 292.5),
    ("NW", 315.0),
    ("NNW", 337.5),
];

// =============================================================================
// Geodesy and Time
// =============================================================================

/// Mean earth radius in nautical miles
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// A resolved timestamp further than this many hours from the issued date
/// is moved one month toward it
pub const MONTH_SHIFT_HOUR_THRESHOLD: i64 = 200;

// =============================================================================
// Defaults
// =============================================================================

/// Environment variable prefix for layered configuration
pub const ENV_PREFIX: &str = "AIRSIGMET";

/// Configuration directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "airsigmet";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Look up a compass point in the cardinal table
pub fn cardinal_degrees(point: &str) -> Option<f64> {
    CARDINAL_DEGREES
        .iter()
        .find(|(name, _)| *name == point)
        .map(|(_, degrees)| *degrees)
}
