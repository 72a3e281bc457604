//! Coordinate validation errors.
//!
//! The distance functions themselves never fail.  These errors are only
//! produced by the opt-in checks on [`GeoPoint`][crate::GeoPoint].

use thiserror::Error;

/// Which half of a coordinate pair a value belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Axis::Longitude => "longitude",
            Axis::Latitude  => "latitude",
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("latitude {value} is outside [-90, 90] degrees")]
    LatitudeOutOfRange { value: f64 },

    #[error("longitude {value} is outside [-180, 180] degrees")]
    LongitudeOutOfRange { value: f64 },

    #[error("{axis} is not a finite number: {value}")]
    NonFinite { axis: Axis, value: f64 },
}

pub type GeoResult<T> = Result<T, GeoError>;
