//! Geographic utilities: great-circle distance, track length and unit
//! conversions.
//!
//! All distances are in meters. Display conversions (km, km/h) happen at the
//! edges; everything internal stays metric base units.

use crate::GpsCoordinate;

/// Mean Earth radius in meters (spherical approximation of WGS84).
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two GPS samples using the haversine formula.
///
/// Accurate to roughly 0.5% against the true ellipsoidal distance, which is
/// well within GPS noise for workout tracking.
///
/// # Example
/// ```
/// use route_stats::{haversine_distance, GpsCoordinate};
///
/// let london = GpsCoordinate::new(51.5074, -0.1278, 5.0, 0);
/// let paris = GpsCoordinate::new(48.8566, 2.3522, 5.0, 0);
/// let d = haversine_distance(&london, &paris);
/// assert!((d / 1000.0 - 343.5).abs() < 1.0); // ~343.5 km
/// ```
pub fn haversine_distance(p1: &GpsCoordinate, p2: &GpsCoordinate) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let dlat = (p2.latitude - p1.latitude).to_radians();
    let dlng = (p2.longitude - p1.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Total length of a track in meters: the sum of haversine distances over
/// consecutive sample pairs. Zero for empty or single-point tracks.
pub fn track_distance(coordinates: &[GpsCoordinate]) -> f64 {
    coordinates
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

/// Convert meters per second to kilometers per hour.
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

/// Convert kilometers per hour to meters per second.
pub fn kmh_to_mps(kmh: f64) -> f64 {
    kmh / 3.6
}
