//! End-to-end tests for report parsing

use super::*;
use crate::Error;
use crate::app::models::{AltitudeReference, BulletinType, Coord, Hazard, Intensity, SpeedUnit};
use crate::app::services::spatial_resolver::geodesy::destination;
use chrono::{TimeZone, Utc};

#[test]
fn test_international_sigmet() {
    let parser = create_test_parser();
    let record = parser.parse(FUKUOKA_SIGMET, None).unwrap();

    assert_eq!(record.raw, FUKUOKA_SIGMET);
    assert!(record.sanitized.starts_with("WSCN31 RJTD 020000 RJJJ SIGMET 1"));
    assert_eq!(record.bulletin.kind.value, BulletinType::Sigmet);
    assert_eq!(record.bulletin.country, "CN");
    assert_eq!(record.bulletin.number, 31);
    assert_eq!(record.issuer, "RJTD");
    assert_eq!(record.correction, None);
    assert_eq!(record.area, "RJJJ");
    assert_eq!(record.report_type, "SIGMET 1");
    assert_eq!(record.station.as_deref(), Some("RJTD"));
    assert_eq!(record.region, "RJJJ FUKUOKA FIR");
    assert_eq!(
        record.body,
        "WSCN31 RJTD 020000 RJJJ SIGMET 1 VALID 020000/020400 RJTD- RJJJ FUKUOKA FIR"
    );
    assert!(record.forecast.is_none());

    let observation = record.observation.unwrap();
    assert_eq!(observation.weather.unwrap().value, Hazard::SevereTurbulence);
    assert_eq!(observation.start_time.unwrap().repr, "0000Z");

    let reprs: Vec<&str> = observation.coords.iter().map(|c| c.repr.as_str()).collect();
    assert_eq!(reprs, vec!["N3500 E13000", "N3400 E13200", "N3300 E13000"]);
    assert_near(&observation.coords[1], 34.0, 132.0, 1e-9);

    let movement = observation.movement.unwrap();
    assert_eq!(movement.repr, "MOV NE 20KT");
    assert_eq!(movement.speed.unwrap().value, 20);

    let floor = observation.floor.unwrap();
    let ceiling = observation.ceiling.unwrap();
    assert_eq!(floor.repr, "FL250");
    assert_eq!(floor.reference, AltitudeReference::FlightLevel(250));
    assert_eq!(ceiling.repr, "450");
    assert_eq!(ceiling.reference, AltitudeReference::FlightLevel(450));

    assert_eq!(observation.intensity.unwrap().value, Intensity::NoChange);
    assert!(observation.other.is_empty());
}

#[test]
fn test_issued_date_anchors_record_times() {
    let parser = create_test_parser();
    let record = parser.parse(FUKUOKA_SIGMET, Some(issued_date())).unwrap();

    assert_eq!(
        record.start_time.unwrap().dt,
        Some(Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap())
    );
    assert_eq!(
        record.end_time.unwrap().dt,
        Some(Utc.with_ymd_and_hms(2024, 3, 2, 4, 0, 0).unwrap())
    );
    assert_eq!(record.time.unwrap().day, Some(2));
}

#[test]
fn test_times_without_issued_date_keep_fields_only() {
    let parser = create_test_parser();
    let record = parser.parse(FUKUOKA_SIGMET, None).unwrap();

    let end = record.end_time.unwrap();
    assert_eq!((end.day, end.hour, end.minute), (Some(2), 4, 0));
    assert_eq!(end.dt, None);
}

#[test]
fn test_convective_sigmet_with_forecast() {
    let parser = create_test_parser();
    let record = parser.parse(CONVECTIVE_SIGMET, None).unwrap();

    assert_eq!(record.area, "SIGC");
    assert_eq!(record.report_type, "CONVECTIVE SIGMET 38C");
    assert_eq!(record.start_time, None);
    assert_eq!(record.end_time.as_ref().unwrap().repr, "2055Z");
    assert_eq!(record.region, "KS OK");
    assert_eq!(
        record.body,
        "WSUS32 KKCI 021855 SIGC CONVECTIVE SIGMET 38C VALID UNTIL 2055Z KS OK"
    );
    assert_eq!(record.units.wind_speed, SpeedUnit::Knots);

    let observation = record.observation.unwrap();
    let reprs: Vec<&str> = observation.coords.iter().map(|c| c.repr.as_str()).collect();
    assert_eq!(reprs, vec!["30SSW BNA", "ROD", "CVG"]);

    let (lat, lon) = destination(&Coord::new(36.12, -86.68, "BNA"), 30.0, 202.5);
    assert_near(&observation.coords[0], lat, lon, 1e-9);

    assert_eq!(
        observation.weather.unwrap().value,
        Hazard::EmbeddedThunderstorms
    );
    assert_eq!(
        observation.ceiling.unwrap().reference,
        AltitudeReference::FlightLevel(400)
    );
    assert_eq!(observation.movement.unwrap().direction.as_deref(), Some("NE"));
    assert_eq!(observation.other, vec!["AREA"]);

    let forecast = record.forecast.unwrap();
    assert_eq!(forecast.start_time.unwrap().hour, 21);
    assert!(forecast.movement.unwrap().stationary);
    assert_eq!(forecast.weather.unwrap().value, Hazard::SevereTurbulence);
    assert!(forecast.coords.is_empty());
}

#[test]
fn test_tropical_cyclone_with_correction() {
    let parser = create_test_parser();
    let record = parser.parse(CYCLONE_SIGMET, None).unwrap();

    assert_eq!(
        record.bulletin.kind.value,
        BulletinType::TropicalCycloneSigmet
    );
    assert_eq!(record.correction.as_deref(), Some("COR"));
    assert_eq!(record.station.as_deref(), Some("KKCI"));
    assert_eq!(record.region, "MIAMI OCEANIC FIR");

    let observation = record.observation.unwrap();
    assert_eq!(observation.position.unwrap().repr, "N2706 W07306");
    assert_eq!(observation.weather.unwrap().value, Hazard::TropicalCyclone);
    assert_eq!(observation.intensity.unwrap().value, Intensity::Weakening);
    assert_eq!(observation.other, vec!["GAMMA", "CB"]);
}

#[test]
fn test_airmet_body_stops_at_first_ellipsis() {
    let parser = create_test_parser();
    let report = "WAUS43 KKCI 021445 CHIZ WA 021445 AIRMET ZULU FOR ICE AND FRZLVL \
                  VALID UNTIL 022100 AIRMET ICE...MN WI FROM BNA TO QQQ";
    let record = parser.parse(report, None).unwrap();

    assert_eq!(record.area, "CHI");
    assert_eq!(record.region, "");
    let observation = record.observation.unwrap();
    assert_eq!(observation.weather.unwrap().value, Hazard::Icing);
    assert!(observation.coords.is_empty());
}

#[test]
fn test_hard_errors_abort_parse() {
    let parser = create_test_parser();

    assert!(matches!(
        parser.parse("WSCN31 RJTD", None),
        Err(Error::MalformedHeader { .. })
    ));
    assert!(matches!(
        parser.parse("XXCN31 RJTD 020000 RJJJ SIGMET 1 VALID 020000/020400", None),
        Err(Error::MalformedHeader { .. })
    ));
    assert!(matches!(
        parser.parse("WSCN31 RJTD 020000 RJJJ SIGMET 1 SEV TURB", None),
        Err(Error::MissingValidityMarker)
    ));
    assert!(matches!(
        parser.parse(
            "WSCN31 RJTD 020000 RJJJ SIGMET 1 VALID 020000/020400 RJJJ FUKUOKA FIR FROM BNA TO QQQ",
            None
        ),
        Err(Error::UnresolvedIdent { .. })
    ));
}

#[test]
fn test_parse_all_isolates_failures() {
    let parser = create_test_parser();
    let results = parser.parse_all([FUKUOKA_SIGMET, "WSCN31 RJTD", CYCLONE_SIGMET], None);

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].as_ref().is_err_and(|e| e.is_parse_error()));
    assert!(results[2].is_ok());
}
