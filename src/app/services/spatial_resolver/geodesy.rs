//! Spherical earth great-circle helpers in nautical miles

use crate::app::models::Coord;
use crate::constants::EARTH_RADIUS_NM;

/// Great-circle distance between two coordinates (haversine)
pub fn distance_nm(a: &Coord, b: &Coord) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_NM * h.sqrt().clamp(0.0, 1.0).asin()
}

/// Point reached travelling `distance_nm` from `origin` on an initial
/// `bearing_deg` (degrees true), as `(lat, lon)`
pub fn destination(origin: &Coord, distance_nm: f64, bearing_deg: f64) -> (f64, f64) {
    let phi1 = origin.lat.to_radians();
    let lambda1 = origin.lon.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_nm / EARTH_RADIUS_NM;

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    (phi2.to_degrees(), normalize_longitude(lambda2.to_degrees()))
}

/// Wrap a longitude into [-180, 180)
pub fn normalize_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> Coord {
        Coord::new(lat, lon, "")
    }

    #[test]
    fn test_distance_zero_and_symmetric() {
        let a = point(36.12, -86.68);
        let b = point(35.0, -85.0);
        assert_eq!(distance_nm(&a, &a), 0.0);
        assert!((distance_nm(&a, &b) - distance_nm(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_of_latitude_is_sixty_miles() {
        let d = distance_nm(&point(0.0, 0.0), &point(1.0, 0.0));
        assert!((d - 60.04).abs() < 0.05, "got {}", d);
    }

    #[test]
    fn test_destination_ssw_of_nashville() {
        let origin = point(36.12, -86.68);
        let (lat, lon) = destination(&origin, 30.0, 202.5);

        let expected = point(35.658_140_9, -86.915_333_7);
        let reached = point(lat, lon);
        assert!(distance_nm(&reached, &expected) < 0.1);
        assert!((distance_nm(&origin, &reached) - 30.0).abs() < 0.1);
    }

    #[test]
    fn test_destination_cardinal_directions() {
        let origin = point(10.0, 20.0);
        let (lat, lon) = destination(&origin, 60.0, 0.0);
        assert!(lat > 10.9 && lat < 11.1);
        assert!((lon - 20.0).abs() < 1e-9);

        let (lat, lon) = destination(&origin, 60.0, 90.0);
        assert!((lat - 10.0).abs() < 0.01);
        assert!(lon > 20.9 && lon < 21.1);
    }

    #[test]
    fn test_destination_across_antimeridian() {
        let (_, lon) = destination(&point(0.0, 179.9), 60.0, 90.0);
        assert!(lon < -179.0, "got {}", lon);
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(45.0), 45.0);
    }
}
