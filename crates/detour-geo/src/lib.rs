//! `detour-geo` — coordinate types and great-circle distance.
//!
//! This crate is a dependency of every other crate in the workspace.  It has
//! no workspace dependencies and a single external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`distance`]    | `haversine`, `haversine_distance`, `EARTH_RADIUS_KM`  |
//! | [`point`]       | `GeoPoint` (degrees), `RadianPoint` (radians)         |
//! | [`error`]       | `GeoError`, `GeoResult`                               |
//!
//! # Units
//!
//! [`haversine_distance`] takes **radians**.  [`GeoPoint`] holds **decimal
//! degrees** and converts on the way in via [`GeoPoint::to_radians`].  Mixing
//! the two up silently produces wrong distances, so every public function
//! states its unit.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the point types.         |

pub mod distance;
pub mod error;
pub mod point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::{DEG_TO_RAD, DistanceKm, EARTH_RADIUS_KM, haversine, haversine_distance};
pub use error::{Axis, GeoError, GeoResult};
pub use point::{GeoPoint, RadianPoint};
