//! Route analysis pipeline.
//!
//! `analyze_route` is the single entry point the host app calls when a tracked
//! workout stops (or is checkpointed mid-session): one linear scan over a
//! stable snapshot of the coordinate list, no I/O, no hidden state. The same
//! input always produces bit-identical output.
//!
//! Malformed samples (out-of-range lat/lng, non-positive accuracy) are the
//! capture layer's responsibility to filter (see [`crate::validate`]); the
//! analyzer only guards against degenerate sequences and divide-by-zero.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calories::{estimate_calories, CalorieConfig};
use crate::format::{elapsed_secs, format_pace};
use crate::geo_utils::{haversine_distance, mps_to_kmh, track_distance};
use crate::splits::{build_splits, Split};
use crate::{ActivityType, GpsCoordinate};

/// Consecutive samples closer together in time than this contribute no
/// derived speed sample: dividing a GPS-noise distance by a near-zero time
/// delta would dominate max speed with garbage.
const MIN_SPEED_INTERVAL_SECS: f64 = 0.5;

/// Immutable summary of one workout session's route.
///
/// `time` and `pace` fields are pre-formatted `MM:SS` strings for the display
/// layer; numeric fields use meters, seconds and km/h as stated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RouteStats {
    /// Total route distance in meters
    pub total_distance: f64,
    /// Session duration in seconds (from start/end time, not sample spacing)
    pub total_time: f64,
    /// Average pace as `MM:SS` per kilometer (`"0:00"` when undefined)
    pub average_pace: String,
    /// Estimated energy expenditure in kilocalories
    pub calories: u32,
    /// Total meters climbed (≥ 0)
    pub elevation_gain: f64,
    /// Total meters descended (≥ 0)
    pub elevation_loss: f64,
    /// Maximum observed speed in km/h
    pub max_speed: f64,
    /// Per-kilometer splits, one per completed kilometer plus a final partial
    pub splits: Vec<Split>,
}

impl RouteStats {
    /// Zeroed stats for empty or single-point input.
    fn empty() -> Self {
        Self {
            total_distance: 0.0,
            total_time: 0.0,
            average_pace: "0:00".to_string(),
            calories: 0,
            elevation_gain: 0.0,
            elevation_loss: 0.0,
            max_speed: 0.0,
            splits: Vec::new(),
        }
    }
}

/// Elevation gain and loss accumulated over a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ElevationProfile {
    /// Sum of positive altitude deltas in meters
    pub gain: f64,
    /// Sum of |negative| altitude deltas in meters
    pub loss: f64,
}

/// Analyze a completed (or in-progress) GPS track.
///
/// Pure and total: never panics or divides by zero, even for empty or
/// single-point input (which yields zeroed stats with the `"0:00"` pace
/// sentinel and no splits).
///
/// `start_time`/`end_time` are Unix epoch milliseconds from the session
/// clock; `body_weight_kg` and `activity` feed the MET-based calorie
/// estimate.
///
/// # Example
/// ```
/// use route_stats::{analyze_route, ActivityType, GpsCoordinate};
///
/// let track = vec![
///     GpsCoordinate::new(0.0, 0.0, 5.0, 0),
///     GpsCoordinate::new(0.009, 0.0, 5.0, 300_000),
/// ];
/// let stats = analyze_route(&track, 0, 300_000, 70.0, ActivityType::Running);
/// assert!(stats.total_distance > 990.0);
/// assert_eq!(stats.splits.len(), 1);
/// ```
pub fn analyze_route(
    coordinates: &[GpsCoordinate],
    start_time: i64,
    end_time: i64,
    body_weight_kg: f64,
    activity: ActivityType,
) -> RouteStats {
    if coordinates.len() < 2 {
        return RouteStats::empty();
    }

    let total_distance = track_distance(coordinates);
    let total_time = elapsed_secs(start_time, end_time);
    let elevation = elevation_profile(coordinates);
    let max_speed = max_speed_kmh(coordinates);
    let splits = build_splits(coordinates);

    let calories = estimate_calories(
        &CalorieConfig::for_activity(activity),
        body_weight_kg,
        total_time,
    );

    debug!(
        "[Analyzer] {:.0}m in {:.0}s, {} splits, gain {:.0}m, max {:.1}km/h",
        total_distance,
        total_time,
        splits.len(),
        elevation.gain,
        max_speed
    );

    RouteStats {
        total_distance,
        total_time,
        average_pace: format_pace(total_time, total_distance),
        calories,
        elevation_gain: elevation.gain,
        elevation_loss: elevation.loss,
        max_speed,
        splits,
    }
}

/// Accumulate elevation gain and loss over consecutive sample pairs.
///
/// Only pairs where **both** samples report an altitude contribute; a pair
/// with a missing altitude on either end is skipped entirely. Treating a
/// missing reading as 0 m would manufacture huge false deltas against real
/// altitudes, so absence means "no data", not sea level.
pub fn elevation_profile(coordinates: &[GpsCoordinate]) -> ElevationProfile {
    let mut gain = 0.0;
    let mut loss = 0.0;

    for pair in coordinates.windows(2) {
        if let (Some(a1), Some(a2)) = (pair[0].altitude, pair[1].altitude) {
            let delta = a2 - a1;
            if delta > 0.0 {
                gain += delta;
            } else {
                loss += -delta;
            }
        }
    }

    ElevationProfile { gain, loss }
}

/// Maximum observed speed over the track in km/h.
///
/// Per consecutive pair the later sample's device-reported speed wins when
/// present; otherwise the speed is derived from segment distance over the
/// time delta. Pairs closer together than half a second contribute no derived
/// sample rather than an unbounded one.
pub fn max_speed_kmh(coordinates: &[GpsCoordinate]) -> f64 {
    let mut max_mps: f64 = 0.0;

    if let Some(speed) = coordinates.first().and_then(|c| c.speed) {
        max_mps = max_mps.max(speed);
    }

    for pair in coordinates.windows(2) {
        let mps = match pair[1].speed {
            Some(speed) => speed,
            None => {
                let dt = elapsed_secs(pair[0].timestamp, pair[1].timestamp);
                if dt < MIN_SPEED_INTERVAL_SECS {
                    continue;
                }
                haversine_distance(&pair[0], &pair[1]) / dt
            }
        };
        if mps.is_finite() {
            max_mps = max_mps.max(mps);
        }
    }

    mps_to_kmh(max_mps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lat_deg_for_meters(meters: f64) -> f64 {
        (meters / crate::geo_utils::EARTH_RADIUS_METERS).to_degrees()
    }

    fn point(lat: f64, ts: i64) -> GpsCoordinate {
        GpsCoordinate::new(lat, 0.0, 5.0, ts)
    }

    /// 1000 m in 5:00, then 500 m in 3:00
    fn two_split_track() -> Vec<GpsCoordinate> {
        vec![
            point(0.0, 0),
            point(lat_deg_for_meters(1000.0), 300_000),
            point(lat_deg_for_meters(1500.0), 480_000),
        ]
    }

    #[test]
    fn test_empty_input_is_zeroed_not_a_panic() {
        let stats = analyze_route(&[], 0, 300_000, 70.0, ActivityType::Running);

        assert_eq!(stats.total_distance, 0.0);
        assert_eq!(stats.total_time, 0.0);
        assert_eq!(stats.average_pace, "0:00");
        assert_eq!(stats.calories, 0);
        assert!(stats.splits.is_empty());
    }

    #[test]
    fn test_single_point_input_is_zeroed() {
        let stats = analyze_route(&[point(0.0, 0)], 0, 300_000, 70.0, ActivityType::Running);

        assert_eq!(stats.total_distance, 0.0);
        assert!(stats.splits.is_empty());
        assert_eq!(stats.average_pace, "0:00");
    }

    #[test]
    fn test_two_point_kilometer_in_five_minutes() {
        let track = vec![point(0.0, 0), point(lat_deg_for_meters(1000.0), 300_000)];
        let stats = analyze_route(&track, 0, 300_000, 70.0, ActivityType::Running);

        assert!((stats.total_distance - 1000.0).abs() < 0.5);
        assert_eq!(stats.total_time, 300.0);
        assert_eq!(stats.average_pace, "5:00");
        assert_eq!(stats.splits.len(), 1);
        assert!((stats.splits[0].distance - 1000.0).abs() < 0.5);
        assert_eq!(stats.splits[0].pace, "5:00");
    }

    #[test]
    fn test_idempotent_over_identical_input() {
        let track = two_split_track();
        let a = analyze_route(&track, 0, 480_000, 70.0, ActivityType::Running);
        let b = analyze_route(&track, 0, 480_000, 70.0, ActivityType::Running);
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_distances_conserve_total() {
        let track = two_split_track();
        let stats = analyze_route(&track, 0, 480_000, 70.0, ActivityType::Running);

        let sum: f64 = stats.splits.iter().map(|s| s.distance).sum();
        assert!((sum - stats.total_distance).abs() < stats.total_distance * 1e-6);
    }

    #[test]
    fn test_aggregates_are_non_negative() {
        // Descending route with out-of-order-looking altitudes and a slow pace
        let track = vec![
            point(0.0, 0).with_altitude(200.0),
            point(lat_deg_for_meters(300.0), 240_000).with_altitude(120.0),
            point(lat_deg_for_meters(600.0), 600_000).with_altitude(140.0),
        ];
        let stats = analyze_route(&track, 0, 600_000, 55.0, ActivityType::Hiking);

        assert!(stats.total_distance >= 0.0);
        assert!(stats.total_time >= 0.0);
        assert!(stats.elevation_gain >= 0.0);
        assert!(stats.elevation_loss >= 0.0);
        assert!(stats.max_speed >= 0.0);
        assert!((stats.elevation_gain - 20.0).abs() < 1e-9);
        assert!((stats.elevation_loss - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_session_clock_drives_total_time() {
        // Sample timestamps only cover 4:00 but the session ran 6:00
        let track = vec![point(0.0, 60_000), point(lat_deg_for_meters(800.0), 300_000)];
        let stats = analyze_route(&track, 0, 360_000, 70.0, ActivityType::Walking);
        assert_eq!(stats.total_time, 360.0);
    }

    #[test]
    fn test_elevation_profile_skips_mixed_pairs() {
        // Alternating missing altitudes: every pair has a gap, so no deltas
        let track = vec![
            point(0.0, 0).with_altitude(100.0),
            point(lat_deg_for_meters(100.0), 30_000),
            point(lat_deg_for_meters(200.0), 60_000).with_altitude(250.0),
            point(lat_deg_for_meters(300.0), 90_000),
        ];
        let profile = elevation_profile(&track);
        assert_eq!(profile.gain, 0.0);
        assert_eq!(profile.loss, 0.0);
    }

    #[test]
    fn test_elevation_profile_counts_complete_pairs_only() {
        let track = vec![
            point(0.0, 0).with_altitude(100.0),
            point(lat_deg_for_meters(100.0), 30_000).with_altitude(130.0),
            point(lat_deg_for_meters(200.0), 60_000),
            point(lat_deg_for_meters(300.0), 90_000).with_altitude(90.0),
            point(lat_deg_for_meters(400.0), 120_000).with_altitude(70.0),
        ];
        let profile = elevation_profile(&track);

        // Only pairs (0,1) and (3,4) are complete: +30 gain, 20 loss
        assert!((profile.gain - 30.0).abs() < 1e-9);
        assert!((profile.loss - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_speed_prefers_device_readings() {
        let track = vec![
            point(0.0, 0),
            // Device says 4 m/s; derived would be ~3.33 m/s over 300 m / 90 s
            point(lat_deg_for_meters(300.0), 90_000).with_speed(4.0),
            point(lat_deg_for_meters(600.0), 180_000).with_speed(2.5),
        ];
        let stats = analyze_route(&track, 0, 180_000, 70.0, ActivityType::Cycling);
        assert!((stats.max_speed - 14.4).abs() < 1e-9); // 4 m/s = 14.4 km/h
    }

    #[test]
    fn test_max_speed_derived_when_device_silent() {
        // 300 m in 90 s = 3.33 m/s = 12 km/h
        let track = vec![point(0.0, 0), point(lat_deg_for_meters(300.0), 90_000)];
        let stats = analyze_route(&track, 0, 90_000, 70.0, ActivityType::Running);
        assert!((stats.max_speed - 12.0).abs() < 0.01);
    }

    #[test]
    fn test_max_speed_ignores_near_zero_time_deltas() {
        // Second pair is 100 ms apart: deriving would claim ~3600 km/h
        let track = vec![
            point(0.0, 0),
            point(lat_deg_for_meters(300.0), 90_000),
            point(lat_deg_for_meters(400.0), 90_100),
        ];
        let speed = max_speed_kmh(&track);
        assert!(speed < 15.0, "got {}", speed);
    }

    #[test]
    fn test_calories_scale_with_weight() {
        let track = two_split_track();
        let light = analyze_route(&track, 0, 480_000, 50.0, ActivityType::Running);
        let heavy = analyze_route(&track, 0, 480_000, 100.0, ActivityType::Running);
        assert!(heavy.calories > light.calories);
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let track = two_split_track();
        let stats = analyze_route(&track, 0, 480_000, 70.0, ActivityType::Running);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"average_pace\""));
        assert!(json.contains("\"splits\""));

        let back: RouteStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
