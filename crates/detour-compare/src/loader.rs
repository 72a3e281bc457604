//! CSV trip-pair loader.
//!
//! # CSV format
//!
//! One row per comparison.  All coordinates are decimal degrees; A/B are the
//! first traveler's pickup and drop-off, C/D the second's.
//!
//! ```csv
//! a_lon,a_lat,b_lon,b_lat,c_lon,c_lat,d_lon,d_lat
//! -122.270833,37.804444,-124.56144015,38.42953815,-122.416667,37.783333,-126.48310112,37.32750937
//! ```
//!
//! Rows are parsed as-is; range checks happen in the comparator when
//! [`CompareConfig::validate_coordinates`][crate::CompareConfig] is set.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use detour_geo::GeoPoint;

use crate::{CompareError, CompareResult, TripPair};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PairRecord {
    a_lon: f64,
    a_lat: f64,
    b_lon: f64,
    b_lat: f64,
    c_lon: f64,
    c_lat: f64,
    d_lon: f64,
    d_lat: f64,
}

impl From<PairRecord> for TripPair {
    fn from(r: PairRecord) -> Self {
        TripPair::from_points(
            GeoPoint::new(r.a_lon, r.a_lat),
            GeoPoint::new(r.b_lon, r.b_lat),
            GeoPoint::new(r.c_lon, r.c_lat),
            GeoPoint::new(r.d_lon, r.d_lat),
        )
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load trip pairs from a CSV file, in file order.
pub fn load_pairs_csv(path: &Path) -> CompareResult<Vec<TripPair>> {
    let file = std::fs::File::open(path)?;
    load_pairs_reader(file)
}

/// Like [`load_pairs_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data.
pub fn load_pairs_reader<R: Read>(reader: R) -> CompareResult<Vec<TripPair>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<PairRecord>()
        .enumerate()
        .map(|(i, result)| {
            result
                .map(TripPair::from)
                .map_err(|e| CompareError::Parse(format!("row {}: {e}", i + 1)))
        })
        .collect()
}
