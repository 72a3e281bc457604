//! Haversine great-circle distance.
//!
//! The central angle between two points is recovered from
//!
//! ```text
//! h = hav(Δlat) + cos(lat1) · cos(lat2) · hav(Δlon)
//! d = 2 · R · asin(√h)
//! ```
//!
//! `h` is mathematically bounded to [0, 1], but rounding near Δ ≈ 0 or
//! Δ ≈ π can push it just outside.  It is clamped before the `asin(√h)` step
//! so the result is always a finite, non-negative distance.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Multiply decimal degrees by this to get radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// A great-circle distance in kilometres.  Always finite and `>= 0.0` when
/// produced by this crate.
pub type DistanceKm = f64;

/// The haversine of `theta` (radians): `(1 - cos θ) / 2`.
///
/// Even and periodic; range [0, 1].
#[inline]
pub fn haversine(theta: f64) -> f64 {
    (1.0 - theta.cos()) / 2.0
}

/// Great-circle distance in kilometres between two points given in
/// **radians**.
///
/// Argument order is longitude before latitude for each point.  Input is not
/// range-checked; any finite angles yield a finite, non-negative result.
pub fn haversine_distance(long1: f64, lat1: f64, long2: f64, lat2: f64) -> DistanceKm {
    let lat_hav = haversine(lat2 - lat1);
    let long_hav = haversine(long2 - long1);

    let h = (lat_hav + lat1.cos() * lat2.cos() * long_hav).clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
