//! Trip endpoints and the four labelled points of a comparison.

use detour_geo::GeoPoint;

use crate::{CompareError, CompareResult};

/// One traveler's journey, in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub pickup:  GeoPoint,
    pub dropoff: GeoPoint,
}

impl Trip {
    #[inline]
    pub fn new(pickup: GeoPoint, dropoff: GeoPoint) -> Self {
        Self { pickup, dropoff }
    }

    /// Direct (no detour) great-circle length of the trip.
    #[inline]
    pub fn direct_km(&self) -> f64 {
        self.pickup.distance_km(self.dropoff)
    }
}

/// Where a point sits in a [`TripPair`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PointRole {
    /// A
    FirstPickup,
    /// B
    FirstDropoff,
    /// C
    SecondPickup,
    /// D
    SecondDropoff,
}

impl PointRole {
    pub fn as_str(self) -> &'static str {
        match self {
            PointRole::FirstPickup   => "A (first pickup)",
            PointRole::FirstDropoff  => "B (first drop-off)",
            PointRole::SecondPickup  => "C (second pickup)",
            PointRole::SecondDropoff => "D (second drop-off)",
        }
    }
}

impl std::fmt::Display for PointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two travelers whose routes may be shared.
///
/// `first` supplies points A and B, `second` supplies C and D.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPair {
    pub first:  Trip,
    pub second: Trip,
}

impl TripPair {
    #[inline]
    pub fn new(first: Trip, second: Trip) -> Self {
        Self { first, second }
    }

    /// Build from the four points in A, B, C, D order.
    #[inline]
    pub fn from_points(a: GeoPoint, b: GeoPoint, c: GeoPoint, d: GeoPoint) -> Self {
        Self::new(Trip::new(a, b), Trip::new(c, d))
    }

    /// The same pair with the travelers relabelled.
    #[inline]
    pub fn swapped(self) -> Self {
        Self::new(self.second, self.first)
    }

    pub fn points(&self) -> [(PointRole, GeoPoint); 4] {
        [
            (PointRole::FirstPickup,   self.first.pickup),
            (PointRole::FirstDropoff,  self.first.dropoff),
            (PointRole::SecondPickup,  self.second.pickup),
            (PointRole::SecondDropoff, self.second.dropoff),
        ]
    }

    /// Range-check all four points.  `index` is carried into the error so
    /// batch callers can locate the offending pair.
    pub fn validate(&self, index: usize) -> CompareResult<()> {
        for (role, point) in self.points() {
            point
                .validate()
                .map_err(|source| CompareError::InvalidPoint { pair: index, role, source })?;
        }
        Ok(())
    }
}
