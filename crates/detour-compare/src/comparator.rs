//! Detour comparison.
//!
//! [`compare_detours`] is the pure core: four points in, one
//! [`DetourResult`] out, nothing printed and nothing validated.
//! [`DetourComparator`] wraps it with a [`CompareConfig`] and adds batch and
//! observer-driven entry points.

use std::fmt;

use detour_geo::{DistanceKm, GeoPoint};

use crate::{BatchSummary, CompareConfig, CompareResult, DetourObserver, TripPair};

// ── DetourOutcome ─────────────────────────────────────────────────────────────

/// Which vehicle should make the detour.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetourOutcome {
    /// Route 2 (C → A → B → D) is shorter: driver 2 carries traveler 1.
    SecondDriverShorter,
    /// Route 1 (A → C → D → B) is shorter: driver 1 carries traveler 2.
    FirstDriverShorter,
    /// Both routes have exactly the same length.
    Equal,
}

impl DetourOutcome {
    /// Outcome when the travelers are relabelled (see [`TripPair::swapped`]).
    #[inline]
    pub fn swapped(self) -> Self {
        match self {
            DetourOutcome::SecondDriverShorter => DetourOutcome::FirstDriverShorter,
            DetourOutcome::FirstDriverShorter  => DetourOutcome::SecondDriverShorter,
            DetourOutcome::Equal               => DetourOutcome::Equal,
        }
    }

    /// Short label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            DetourOutcome::SecondDriverShorter => "second_driver_shorter",
            DetourOutcome::FirstDriverShorter  => "first_driver_shorter",
            DetourOutcome::Equal               => "equal",
        }
    }
}

impl fmt::Display for DetourOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DetourLegs ────────────────────────────────────────────────────────────────

/// The four distinct great-circle legs used by the two routes.
///
/// Distance is symmetric, so A↔C and B↔D are shared by both routes.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetourLegs {
    pub a_to_c: DistanceKm,
    pub c_to_d: DistanceKm,
    pub d_to_b: DistanceKm,
    pub a_to_b: DistanceKm,
}

impl DetourLegs {
    /// A → C → D → B
    #[inline]
    pub fn route1_km(&self) -> DistanceKm {
        self.a_to_c + self.c_to_d + self.d_to_b
    }

    /// C → A → B → D
    #[inline]
    pub fn route2_km(&self) -> DistanceKm {
        self.a_to_c + self.a_to_b + self.d_to_b
    }
}

// ── DetourResult ──────────────────────────────────────────────────────────────

/// The decision plus the two totals that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetourResult {
    pub outcome:   DetourOutcome,
    /// Driver 1 detours: A → C → D → B.
    pub route1_km: DistanceKm,
    /// Driver 2 detours: C → A → B → D.
    pub route2_km: DistanceKm,
    pub legs:      DetourLegs,
}

impl DetourResult {
    fn from_legs(legs: DetourLegs) -> Self {
        let route1_km = legs.route1_km();
        let route2_km = legs.route2_km();

        let outcome = if route1_km > route2_km {
            DetourOutcome::SecondDriverShorter
        } else if route1_km < route2_km {
            DetourOutcome::FirstDriverShorter
        } else {
            DetourOutcome::Equal
        };

        Self { outcome, route1_km, route2_km, legs }
    }

    /// Length of the winning route (either, on a tie).
    #[inline]
    pub fn shorter_km(&self) -> DistanceKm {
        self.route1_km.min(self.route2_km)
    }

    #[inline]
    pub fn longer_km(&self) -> DistanceKm {
        self.route1_km.max(self.route2_km)
    }

    /// Distance saved by picking the shorter route.
    #[inline]
    pub fn savings_km(&self) -> DistanceKm {
        self.longer_km() - self.shorter_km()
    }
}

impl fmt::Display for DetourResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            DetourOutcome::SecondDriverShorter => write!(
                f,
                "The detour distance of driver 2 picking up and dropping off driver 1 is shorter \
                 with a distance of {:.4} km compared to {:.4} km",
                self.route2_km, self.route1_km
            ),
            DetourOutcome::FirstDriverShorter => write!(
                f,
                "The detour distance of driver 1 picking up and dropping off driver 2 is shorter \
                 with a distance of {:.4} km compared to {:.4} km",
                self.route1_km, self.route2_km
            ),
            DetourOutcome::Equal => write!(
                f,
                "The two detour distances are the same with a value of {:.4} km",
                self.route1_km
            ),
        }
    }
}

// ── Pure core ─────────────────────────────────────────────────────────────────

/// Compare the two shared routings for travelers A → B and C → D.
///
/// All four points are in **decimal degrees**; they are converted to radians
/// here before any distance is taken.  No validation is performed.
pub fn compare_detours(a: GeoPoint, b: GeoPoint, c: GeoPoint, d: GeoPoint) -> DetourResult {
    let (a, b, c, d) = (a.to_radians(), b.to_radians(), c.to_radians(), d.to_radians());

    DetourResult::from_legs(DetourLegs {
        a_to_c: a.distance_km(c),
        c_to_d: c.distance_km(d),
        d_to_b: d.distance_km(b),
        a_to_b: a.distance_km(b),
    })
}

/// [`compare_detours`] over a [`TripPair`].
#[inline]
pub fn compare_pair(pair: &TripPair) -> DetourResult {
    compare_detours(
        pair.first.pickup,
        pair.first.dropoff,
        pair.second.pickup,
        pair.second.dropoff,
    )
}

// ── DetourComparator ──────────────────────────────────────────────────────────

/// Configured front end over [`compare_detours`].
///
/// Holds no mutable state; share it freely across threads.
#[derive(Clone, Debug, Default)]
pub struct DetourComparator {
    pub config: CompareConfig,
}

impl DetourComparator {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Compare a single pair, validating first if configured.
    pub fn compare(&self, pair: &TripPair) -> CompareResult<DetourResult> {
        self.compare_indexed(0, pair)
    }

    /// Compare every pair, returning results in input order.
    ///
    /// Fails on the first invalid pair when validation is on.  With the
    /// `parallel` feature the work is spread over Rayon's pool; which invalid
    /// pair is reported is then unspecified if there are several.
    pub fn compare_all(&self, pairs: &[TripPair]) -> CompareResult<Vec<DetourResult>> {
        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .enumerate()
                .map(|(i, pair)| self.compare_indexed(i, pair))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            pairs
                .par_iter()
                .enumerate()
                .map(|(i, pair)| self.compare_indexed(i, pair))
                .collect()
        }
    }

    /// Compare every pair sequentially, reporting each result to `observer`.
    ///
    /// Stops at the first invalid pair; `on_batch_end` is not called in that
    /// case.
    pub fn run<O: DetourObserver>(
        &self,
        pairs:    &[TripPair],
        observer: &mut O,
    ) -> CompareResult<BatchSummary> {
        let mut summary = BatchSummary::default();

        for (i, pair) in pairs.iter().enumerate() {
            let result = self.compare_indexed(i, pair)?;
            summary.record(&result);
            observer.on_result(i, pair, &result);
        }

        observer.on_batch_end(&summary);
        Ok(summary)
    }

    fn compare_indexed(&self, index: usize, pair: &TripPair) -> CompareResult<DetourResult> {
        if self.config.validate_coordinates {
            pair.validate(index)?;
        }
        Ok(compare_pair(pair))
    }
}
