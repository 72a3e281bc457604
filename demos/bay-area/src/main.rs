//! bay_area — detour comparison demo for the rust_detour workspace.
//!
//! Compares shared routings for pairs of travelers starting in the San
//! Francisco Bay Area and prints which driver should make the detour.
//!
//! ```text
//! cargo run -p bay-area                 # embedded pairs
//! cargo run -p bay-area -- pairs.csv    # pairs from a CSV file
//! ```

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use detour_compare::{
    BatchSummary, CompareConfig, DetourComparator, DetourObserver, DetourResult, TripPair,
    load_pairs_csv, load_pairs_reader,
};
use detour_geo::EARTH_RADIUS_KM;

// ── Trip pairs CSV ────────────────────────────────────────────────────────────

// A/B = first traveler, C/D = second traveler, all in decimal degrees.
// Row 0: Oakland → offshore     vs San Francisco → offshore
// Row 1: Sacramento → Nevada    vs Alameda → Monterey Bay
// Row 2: Alameda → Monterey Bay vs Oakland → offshore
// Row 3: San Francisco → Oakland, twice (tie)
const PAIRS_CSV: &str = "\
a_lon,a_lat,b_lon,b_lat,c_lon,c_lat,d_lon,d_lat\n\
-122.270833,37.804444,-124.56144015,38.42953815,-122.416667,37.783333,-126.48310112,37.32750937\n\
-121.468889,38.555556,-116.64660595,37.69306415,-122.274444,37.756111,-123.7362221,36.71769119\n\
-122.274444,37.756111,-123.7362221,36.71769119,-122.270833,37.804444,-124.56144015,38.42953815\n\
-122.416667,37.783333,-122.270833,37.804444,-122.416667,37.783333,-122.270833,37.804444\n\
";

// ── Printing observer ─────────────────────────────────────────────────────────

struct PrintObserver;

impl DetourObserver for PrintObserver {
    fn on_result(&mut self, index: usize, pair: &TripPair, result: &DetourResult) {
        println!(
            "#{index}  {} → {}  |  {} → {}",
            pair.first.pickup, pair.first.dropoff, pair.second.pickup, pair.second.dropoff
        );
        println!(
            "    direct: A–B {:.4}  C–D {:.4} km",
            pair.first.direct_km(),
            pair.second.direct_km()
        );
        println!(
            "    legs: A–C {:.4}  C–D {:.4}  D–B {:.4}  A–B {:.4} km",
            result.legs.a_to_c, result.legs.c_to_d, result.legs.d_to_b, result.legs.a_to_b
        );
        println!("    {result}");
    }

    fn on_batch_end(&mut self, summary: &BatchSummary) {
        println!();
        println!("Summary: {summary}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== bay_area — rust_detour ===");
    println!("Earth radius: {EARTH_RADIUS_KM} km");
    println!();

    // 1. Load pairs from the CLI path if given, else the embedded CSV.
    let pairs = match std::env::args().nth(1) {
        Some(path) => {
            let pairs = load_pairs_csv(Path::new(&path))?;
            println!("Loaded {} trip pairs from {path}", pairs.len());
            pairs
        }
        None => {
            let pairs = load_pairs_reader(Cursor::new(PAIRS_CSV))?;
            println!("Loaded {} embedded trip pairs", pairs.len());
            pairs
        }
    };
    println!();

    // 2. Compare, rejecting out-of-range coordinates.
    let comparator = DetourComparator::new(CompareConfig::validating());
    if let Err(e) = comparator.run(&pairs, &mut PrintObserver) {
        eprintln!("comparison error: {e}");
        return Err(e.into());
    }

    Ok(())
}
