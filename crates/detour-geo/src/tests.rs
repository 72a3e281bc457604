//! Unit tests for detour-geo.

use std::f64::consts::{FRAC_PI_2, PI};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{DEG_TO_RAD, EARTH_RADIUS_KM, GeoPoint, RadianPoint, haversine, haversine_distance};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Random point in radians, inside the valid coordinate range.
fn random_point(rng: &mut SmallRng) -> RadianPoint {
    RadianPoint::new(
        rng.gen_range(-180.0..=180.0) * DEG_TO_RAD,
        rng.gen_range(-90.0..=90.0) * DEG_TO_RAD,
    )
}

fn assert_within_pct(actual: f64, expected: f64, pct: f64) {
    let margin = expected * pct / 100.0;
    assert!(
        (actual - expected).abs() <= margin,
        "expected {expected} ± {pct}%, got {actual}"
    );
}

#[cfg(test)]
mod haversine_fn {
    use super::*;

    #[test]
    fn zero_angle() {
        assert_eq!(haversine(0.0), 0.0);
    }

    #[test]
    fn half_turn_is_one() {
        assert!((haversine(PI) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn even_function() {
        for theta in [0.1, 0.5, 1.0, 2.5, PI, 7.0] {
            assert_eq!(haversine(-theta), haversine(theta));
        }
    }

    #[test]
    fn stays_in_unit_interval() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let h = haversine(rng.gen_range(-100.0..100.0));
            assert!((0.0..=1.0).contains(&h), "got {h}");
        }
    }
}

#[cfg(test)]
mod distance {
    use super::*;

    #[test]
    fn zero_self_distance() {
        let p = GeoPoint::new(-122.270833, 37.804444);
        assert_eq!(p.distance_km(p), 0.0);
    }

    #[test]
    fn symmetric() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = random_point(&mut rng);
            let q = random_point(&mut rng);
            let (pq, qp) = (p.distance_km(q), q.distance_km(p));
            assert!((pq - qp).abs() < 1e-9, "{pq} != {qp}");
        }
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.19 km
        let a = GeoPoint::new(-88.0, 30.0);
        let b = GeoPoint::new(-88.0, 31.0);
        assert!((a.distance_km(b) - 111.195).abs() < 0.01, "got {}", a.distance_km(b));
    }

    #[test]
    fn oakland() {
        let d = GeoPoint::new(-122.270833, 37.804444)
            .distance_km(GeoPoint::new(-124.56144015, 38.42953815));
        assert_within_pct(d, 212.1536, 1.0);
    }

    #[test]
    fn san_francisco() {
        let d = GeoPoint::new(-122.416667, 37.783333)
            .distance_km(GeoPoint::new(-126.48310112, 37.32750937));
        assert_within_pct(d, 362.0991, 1.0);
    }

    #[test]
    fn sacramento() {
        let d = GeoPoint::new(-121.468889, 38.555556)
            .distance_km(GeoPoint::new(-116.64660595, 37.69306415));
        assert_within_pct(d, 432.6543, 1.0);
    }

    #[test]
    fn alameda_via_raw_radians() {
        let d = haversine_distance(
            -122.274444 * DEG_TO_RAD,
            37.756111 * DEG_TO_RAD,
            -123.7362221 * DEG_TO_RAD,
            36.71769119 * DEG_TO_RAD,
        );
        assert_within_pct(d, 173.4764, 1.0);
    }
}

#[cfg(test)]
mod clamp {
    use super::*;

    const HALF_CIRCUMFERENCE: f64 = PI * EARTH_RADIUS_KM;

    fn assert_sane(d: f64) {
        assert!(d.is_finite(), "got {d}");
        assert!(d >= 0.0, "got {d}");
        assert!(d <= HALF_CIRCUMFERENCE + 1e-6, "got {d}");
    }

    #[test]
    fn antipodal_on_equator() {
        let d = haversine_distance(0.0, 0.0, PI, 0.0);
        assert_sane(d);
        assert!((d - HALF_CIRCUMFERENCE).abs() < 1e-6);
    }

    #[test]
    fn pole_to_pole() {
        let d = haversine_distance(0.0, FRAC_PI_2, 0.0, -FRAC_PI_2);
        assert_sane(d);
        assert!((d - HALF_CIRCUMFERENCE).abs() < 1e-6);
    }

    #[test]
    fn h_above_one_is_clamped() {
        // Near-antipodal pair whose unclamped h rounds to 1.0000000000000002.
        let (long1, lat1) = (2.7120904331813183, 1.2044636300410265);
        let (long2, lat2) = (5.853683083075521, -1.2044636337366168);

        let h = haversine(lat2 - lat1) + lat1.cos() * lat2.cos() * haversine(long2 - long1);
        assert!(h > 1.0, "h = {h:e}");
        assert!(h.sqrt().asin().is_nan());

        let d = haversine_distance(long1, lat1, long2, lat2);
        assert_sane(d);
        assert!((d - HALF_CIRCUMFERENCE).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn near_antipodal() {
        for eps in [0.0, 1e-12, 1e-9, 1e-6] {
            assert_sane(haversine_distance(-PI, eps, PI - eps, -eps));
            assert_sane(haversine_distance(0.0, FRAC_PI_2 - eps, PI, -FRAC_PI_2 + eps));
        }
    }

    #[test]
    fn nearly_identical_points() {
        for eps in [1e-15, 1e-12, 1e-9] {
            let d = haversine_distance(1.0, 0.5, 1.0 + eps, 0.5 - eps);
            assert_sane(d);
            assert!(d < 1e-3);
        }
    }

    #[test]
    fn out_of_range_input_is_not_rejected() {
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..1_000 {
            let d = haversine_distance(
                rng.gen_range(-1e6..1e6),
                rng.gen_range(-1e6..1e6),
                rng.gen_range(-1e6..1e6),
                rng.gen_range(-1e6..1e6),
            );
            assert_sane(d);
        }
    }
}

#[cfg(test)]
mod validation {
    use crate::{Axis, GeoError, GeoPoint};

    #[test]
    fn accepts_bounds() {
        assert!(GeoPoint::try_new(180.0, 90.0).is_ok());
        assert!(GeoPoint::try_new(-180.0, -90.0).is_ok());
    }

    #[test]
    fn rejects_latitude() {
        assert_eq!(
            GeoPoint::try_new(0.0, 90.5),
            Err(GeoError::LatitudeOutOfRange { value: 90.5 })
        );
    }

    #[test]
    fn rejects_longitude() {
        assert_eq!(
            GeoPoint::try_new(-181.0, 0.0),
            Err(GeoError::LongitudeOutOfRange { value: -181.0 })
        );
    }

    #[test]
    fn rejects_non_finite() {
        let err = GeoPoint::new(f64::INFINITY, 0.0).validate().unwrap_err();
        assert_eq!(err, GeoError::NonFinite { axis: Axis::Longitude, value: f64::INFINITY });
        assert!(matches!(
            GeoPoint::new(0.0, f64::NAN).validate(),
            Err(GeoError::NonFinite { axis: Axis::Latitude, .. })
        ));
    }

    #[test]
    fn error_message() {
        let err = GeoPoint::try_new(0.0, 100.0).unwrap_err();
        assert_eq!(err.to_string(), "latitude 100 is outside [-90, 90] degrees");
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(-122.5, 37.25).to_string(), "(-122.500000, 37.250000)");
    }
}
