//! `cg-core`: foundational types for the `chargegraph` workspace.
//!
//! This crate is a dependency of every other `cg-*` crate.  It has no `cg-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `NodeId`                                               |
//! | [`geo`]        | `GeoPoint`, haversine distance, planar midpoint        |
//! | [`facility`]   | `Facility`, `Origin`, `RegionCode`                     |
//! | [`store`]      | `FacilityStore` (the full node set)                    |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod facility;
pub mod geo;
pub mod ids;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use facility::{Facility, Origin, RegionCode};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, KM_PER_DEGREE, distance_km};
pub use ids::NodeId;
pub use store::FacilityStore;
