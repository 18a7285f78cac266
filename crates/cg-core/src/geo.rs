//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude in degrees.  Distances are in
//! kilometres throughout the workspace.

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Length of one degree of arc on the haversine sphere, in kilometres
/// (`EARTH_RADIUS_KM · π / 180`).
///
/// Any two points whose latitudes differ by `Δ` degrees are at least
/// `Δ · KM_PER_DEGREE` apart, whatever their longitudes.
pub const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

/// A WGS-84 geographic coordinate in degrees.
///
/// Nothing enforces `lat ∈ [-90, 90]` or `lon ∈ [-180, 180]`; values are
/// taken as parsed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Exactly symmetric: the deltas are taken as absolute values and the
    /// cosine product is commutative, so swapping the arguments yields the
    /// same bits.  `p.distance_km(p)` is exactly `0.0`.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (self.lat - other.lat).abs().to_radians();
        let d_lon = (self.lon - other.lon).abs().to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Arithmetic midpoint of the two coordinates.
    ///
    /// This is a planar approximation, not the geodesic midpoint.  It is
    /// close enough at the short spans the proximity graph deals with and is
    /// the accepted placement rule; do not swap it for a great-circle
    /// midpoint without a new requirement.
    pub fn planar_midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint::new((self.lat + other.lat) / 2.0, (self.lon + other.lon) / 2.0)
    }
}

/// Free-function form of [`GeoPoint::distance_km`].
#[inline]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    a.distance_km(b)
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
