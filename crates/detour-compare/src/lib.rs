//! `detour-compare` — decide which of two travelers should detour to carry
//! the other.
//!
//! Traveler 1 goes from A to B, traveler 2 from C to D.  Two shared routings
//! are compared:
//!
//! ```text
//! route 1  (driver 1 detours):  A → C → D → B
//! route 2  (driver 2 detours):  C → A → B → D
//! ```
//!
//! The shorter total wins; an exact tie is [`DetourOutcome::Equal`].
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`trip`]        | `Trip`, `TripPair`, `PointRole`                           |
//! | [`comparator`]  | `compare_detours`, `DetourComparator`, `DetourResult`     |
//! | [`config`]      | `CompareConfig`                                           |
//! | [`observer`]    | `DetourObserver` trait, `NoopObserver`, `BatchSummary`    |
//! | [`loader`]      | `load_pairs_csv`, `load_pairs_reader`                     |
//! | [`error`]       | `CompareError`, `CompareResult<T>`                        |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `compare_all` runs on Rayon's thread pool.             |
//! | `serde`    | `Serialize`/`Deserialize` on public value types.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use detour_compare::{compare_detours, DetourOutcome};
//! use detour_geo::GeoPoint;
//!
//! let result = compare_detours(a, b, c, d);
//! if result.outcome == DetourOutcome::FirstDriverShorter {
//!     println!("{result}");
//! }
//! ```

pub mod comparator;
pub mod config;
pub mod error;
pub mod loader;
pub mod observer;
pub mod trip;


pub use comparator::{
    DetourComparator, DetourLegs, DetourOutcome, DetourResult, compare_detours, compare_pair,
};
pub use config::CompareConfig;
pub use error::{CompareError, CompareResult};
pub use loader::{load_pairs_csv, load_pairs_reader};
pub use observer::{BatchSummary, DetourObserver, NoopObserver};
pub use trip::{PointRole, Trip, TripPair};
