//! Geographic coordinate types.
//!
//! `GeoPoint` is the caller-facing type in decimal degrees.  `RadianPoint` is
//! what the trigonometric core consumes; convert with
//! [`GeoPoint::to_radians`].  Both store longitude first, matching the
//! argument order of [`haversine_distance`].

use crate::distance::{DEG_TO_RAD, DistanceKm, haversine_distance};
use crate::error::{Axis, GeoError, GeoResult};

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 coordinate in decimal degrees.
///
/// Construction does not range-check.  Use [`GeoPoint::try_new`] or
/// [`GeoPoint::validate`] where out-of-range input should be rejected.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Like [`GeoPoint::new`] but rejects non-finite or out-of-range values.
    pub fn try_new(lon: f64, lat: f64) -> GeoResult<Self> {
        Self::new(lon, lat).validate()
    }

    /// Check that both values are finite, latitude is within [-90, 90] and
    /// longitude within [-180, 180].  Returns `self` unchanged on success.
    pub fn validate(self) -> GeoResult<Self> {
        if !self.lon.is_finite() {
            return Err(GeoError::NonFinite { axis: Axis::Longitude, value: self.lon });
        }
        if !self.lat.is_finite() {
            return Err(GeoError::NonFinite { axis: Axis::Latitude, value: self.lat });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::LatitudeOutOfRange { value: self.lat });
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(GeoError::LongitudeOutOfRange { value: self.lon });
        }
        Ok(self)
    }

    #[inline]
    pub fn to_radians(self) -> RadianPoint {
        RadianPoint {
            lon: self.lon * DEG_TO_RAD,
            lat: self.lat * DEG_TO_RAD,
        }
    }

    /// Great-circle distance in kilometres.  Both points are in degrees.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> DistanceKm {
        self.to_radians().distance_km(other.to_radians())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

// ── RadianPoint ───────────────────────────────────────────────────────────────

/// A coordinate in radians, as consumed by [`haversine_distance`].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadianPoint {
    pub lon: f64,
    pub lat: f64,
}

impl RadianPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    #[inline]
    pub fn distance_km(self, other: RadianPoint) -> DistanceKm {
        haversine_distance(self.lon, self.lat, other.lon, other.lat)
    }
}
