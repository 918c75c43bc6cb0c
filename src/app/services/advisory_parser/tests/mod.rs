//! Test utilities and report fixtures for advisory parser testing

use crate::app::services::advisory_parser::AdvisoryParser;
use chrono::NaiveDate;
use std::sync::Arc;

pub use crate::app::services::spatial_resolver::tests::{
    MockResolver, assert_near, create_test_resolver,
};

mod parser_tests;

/// International SIGMET with a coordinate polygon and no forecast section
pub const FUKUOKA_SIGMET: &str = "WSCN31 RJTD 020000
RJJJ SIGMET 1 VALID 020000/020400 RJTD-
RJJJ FUKUOKA FIR SEV TURB OBS AT 0000Z FROM N3500 E13000 - N3400 E13200 - N3300 E13000
FL250/450 MOV NE 20KT NC=";

/// Domestic convective SIGMET with navaid vectors and a forecast section
pub const CONVECTIVE_SIGMET: &str = "WSUS32 KKCI 021855
SIGC
CONVECTIVE SIGMET 38C
VALID UNTIL 2055Z
KS OK
FROM 30SSW BNA-ROD-CVG
AREA EMBD TS MOV NE 25KT TOPS TO FL400
FCST 2100Z SEV TURB STNR";

/// Tropical cyclone SIGMET with a point position
pub const CYCLONE_SIGMET: &str = "WCNT01 KKCI 021500 COR
KZMA SIGMET ALFA 2 VALID 021500/022100 KKCI-
MIAMI OCEANIC FIR TC GAMMA PSN N2706 W07306 CB TOP FL500 WKN=";

/// Parser backed by the shared mock resolver
pub fn create_test_parser() -> AdvisoryParser {
    AdvisoryParser::new(Arc::new(create_test_resolver()))
}

/// Issued date used to anchor fixture timestamps
pub fn issued_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
}
