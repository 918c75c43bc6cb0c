//! Data models for AIRMET/SIGMET decoding
//!
//! This module contains the structured representation of a decoded advisory:
//! the top-level record, its current/forecast observations, and the value
//! types they are built from. Every derived value keeps the raw substring it
//! came from in a `repr` field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Code Tables
// =============================================================================

/// A decoded code together with the token it was decoded from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code<T> {
    pub repr: String,
    pub value: T,
}

impl<T> Code<T> {
    pub fn new(repr: impl Into<String>, value: T) -> Self {
        Self {
            repr: repr.into(),
            value,
        }
    }
}

/// Bulletin type from the first two letters of the bulletin code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletinType {
    Airmet,
    Sigmet,
    TropicalCycloneSigmet,
    VolcanicAshSigmet,
}

impl fmt::Display for BulletinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BulletinType::Airmet => "airmet",
            BulletinType::Sigmet => "sigmet",
            BulletinType::TropicalCycloneSigmet => "tropical cyclone sigmet",
            BulletinType::VolcanicAshSigmet => "volcanic ash sigmet",
        };
        f.write_str(name)
    }
}

/// Intensity trend code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    NoChange,
    Weakening,
    Intensifying,
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intensity::NoChange => "no change",
            Intensity::Weakening => "decreasing in intensity",
            Intensity::Intensifying => "increasing in intensity",
        };
        f.write_str(name)
    }
}

/// Weather hazard described by an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hazard {
    Thunderstorms,
    IsolatedThunderstorms,
    OccasionalThunderstorms,
    FrequentThunderstorms,
    EmbeddedThunderstorms,
    ObscuredThunderstorms,
    SquallLineThunderstorms,
    IsolatedThunderstormsHail,
    OccasionalThunderstormsHail,
    FrequentThunderstormsHail,
    EmbeddedThunderstormsHail,
    ObscuredThunderstormsHail,
    SquallLineThunderstormsHail,
    Cumulonimbus,
    TropicalCyclone,
    Turbulence,
    ModerateTurbulence,
    SevereTurbulence,
    Icing,
    ModerateIcing,
    SevereIcing,
    SevereIcingFreezingRain,
    ModerateMountainWave,
    SevereMountainWave,
    HeavyDuststorm,
    HeavySandstorm,
    RadioactiveCloud,
    VolcanicAsh,
    MountainObscuration,
    StrongSurfaceWind,
    ReducedVisibility,
    LowLevelWindShear,
    InstrumentConditions,
    BrokenCloud,
    OvercastCloud,
}

impl Hazard {
    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Hazard::Thunderstorms => "Thunderstorms",
            Hazard::IsolatedThunderstorms => "Isolated thunderstorms",
            Hazard::OccasionalThunderstorms => "Occasional thunderstorms",
            Hazard::FrequentThunderstorms => "Frequent thunderstorms",
            Hazard::EmbeddedThunderstorms => "Embedded thunderstorms",
            Hazard::ObscuredThunderstorms => "Obscured thunderstorms",
            Hazard::SquallLineThunderstorms => "Squall line thunderstorms",
            Hazard::IsolatedThunderstormsHail => "Isolated thunderstorms with hail",
            Hazard::OccasionalThunderstormsHail => "Occasional thunderstorms with hail",
            Hazard::FrequentThunderstormsHail => "Frequent thunderstorms with hail",
            Hazard::EmbeddedThunderstormsHail => "Embedded thunderstorms with hail",
            Hazard::ObscuredThunderstormsHail => "Obscured thunderstorms with hail",
            Hazard::SquallLineThunderstormsHail => "Squall line thunderstorms with hail",
            Hazard::Cumulonimbus => "Cumulonimbus clouds",
            Hazard::TropicalCyclone => "Tropical cyclone",
            Hazard::Turbulence => "Turbulence",
            Hazard::ModerateTurbulence => "Moderate turbulence",
            Hazard::SevereTurbulence => "Severe turbulence",
            Hazard::Icing => "Icing",
            Hazard::ModerateIcing => "Moderate icing",
            Hazard::SevereIcing => "Severe icing",
            Hazard::SevereIcingFreezingRain => "Severe icing due to freezing rain",
            Hazard::ModerateMountainWave => "Moderate mountain wave",
            Hazard::SevereMountainWave => "Severe mountain wave",
            Hazard::HeavyDuststorm => "Heavy duststorm",
            Hazard::HeavySandstorm => "Heavy sandstorm",
            Hazard::RadioactiveCloud => "Radioactive cloud",
            Hazard::VolcanicAsh => "Volcanic ash",
            Hazard::MountainObscuration => "Mountain obscuration",
            Hazard::StrongSurfaceWind => "Strong surface wind",
            Hazard::ReducedVisibility => "Reduced surface visibility",
            Hazard::LowLevelWindShear => "Low-level wind shear",
            Hazard::InstrumentConditions => "Instrument flight rules conditions",
            Hazard::BrokenCloud => "Broken cloud",
            Hazard::OvercastCloud => "Overcast cloud",
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// =============================================================================
// Units
// =============================================================================

/// Speed unit of a movement speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    #[default]
    Knots,
    KilometersPerHour,
}

/// Altitude unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AltitudeUnit {
    #[default]
    Feet,
}

/// Unit state discovered while decoding a report, shared by the current
/// and forecast observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Units {
    pub wind_speed: SpeedUnit,
    pub altitude: AltitudeUnit,
}

// =============================================================================
// Value Types
// =============================================================================

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
    /// Source text this coordinate was derived from
    pub repr: String,
}

impl Coord {
    pub fn new(lat: f64, lon: f64, repr: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            repr: repr.into(),
        }
    }

    /// Same location with a different source text
    pub fn with_repr(&self, repr: impl Into<String>) -> Self {
        Self {
            lat: self.lat,
            lon: self.lon,
            repr: repr.into(),
        }
    }
}

/// A report time. Advisories carry day-of-month and time of day only, so the
/// calendar value is resolved only when an issued date is supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamp {
    pub repr: String,
    /// Day of month when the source carried one
    pub day: Option<u32>,
    pub hour: u32,
    pub minute: u32,
    /// Calendar value anchored to the issued date
    pub dt: Option<DateTime<Utc>>,
}

/// Vertical reference of an altitude value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "unit", content = "value")]
pub enum AltitudeReference {
    Surface,
    FlightLevel(u32),
    Feet(u32),
}

/// Floor or ceiling of a hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Altitude {
    pub repr: String,
    pub reference: AltitudeReference,
    /// Unbounded above this value (`ABV`)
    pub above: bool,
}

impl Altitude {
    /// Altitude in feet, treating flight levels as hundreds of feet
    pub fn feet(&self) -> u32 {
        match self.reference {
            AltitudeReference::Surface => 0,
            AltitudeReference::FlightLevel(level) => level.saturating_mul(100),
            AltitudeReference::Feet(feet) => feet,
        }
    }
}

/// Movement speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    pub repr: String,
    pub value: u32,
    pub unit: SpeedUnit,
}

/// Hazard movement, either stationary or a direction with optional speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub repr: String,
    pub direction: Option<String>,
    pub speed: Option<Speed>,
    pub stationary: bool,
}

/// Bulletin identifier such as `WSCN31`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bulletin {
    pub repr: String,
    pub kind: Code<BulletinType>,
    pub country: String,
    pub number: u32,
}

// =============================================================================
// Observations and Records
// =============================================================================

/// A current or forecast hazard observation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub weather: Option<Code<Hazard>>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    /// Point position for `PSN` style observations
    pub position: Option<Coord>,
    pub floor: Option<Altitude>,
    pub ceiling: Option<Altitude>,
    /// Polygon vertices in report order
    pub coords: Vec<Coord>,
    /// Lateral boundary clauses such as `N OF N2050`
    pub bounds: Vec<String>,
    pub movement: Option<Movement>,
    pub intensity: Option<Code<Intensity>>,
    /// Tokens no extractor claimed
    pub other: Vec<String>,
}

/// A fully decoded AIRMET or SIGMET
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryRecord {
    pub raw: String,
    pub sanitized: String,
    /// Originating station from a `XXXX-` token after the validity window
    pub station: Option<String>,
    pub time: Option<Timestamp>,
    pub bulletin: Bulletin,
    pub issuer: String,
    pub correction: Option<String>,
    pub area: String,
    pub report_type: String,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    /// Header portion of the sanitized text preceding the decoded body
    pub body: String,
    pub region: String,
    pub observation: Option<Observation>,
    pub forecast: Option<Observation>,
    pub units: Units,
}

impl AdvisoryRecord {
    /// All polygon coordinates across the observation and forecast
    pub fn all_coords(&self) -> impl Iterator<Item = &Coord> {
        self.observation
            .iter()
            .chain(self.forecast.iter())
            .flat_map(|obs| obs.coords.iter())
    }
}
