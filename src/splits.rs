//! Kilometer-aligned split generation.
//!
//! Walks a track accumulating haversine distance and closes a split at the
//! first sample that crosses each 1000 m boundary. Interior splits therefore
//! land at whatever sample crossed the boundary (≈1000 m for typical 1 Hz
//! capture), and any leftover distance becomes one final partial split, never
//! discarded and never padded to a full kilometer.

use serde::{Deserialize, Serialize};

use crate::format::{elapsed_secs, format_min_sec, format_pace};
use crate::geo_utils::haversine_distance;
use crate::GpsCoordinate;

/// Split length in meters.
pub const SPLIT_DISTANCE_METERS: f64 = 1000.0;

/// Slack for boundary comparisons so a track measuring 999.999999 m from
/// float dust still closes its kilometer split.
const BOUNDARY_EPSILON: f64 = 1e-6;

/// One kilometer-aligned segment of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Split {
    /// 1-based kilometer index, strictly increasing with no gaps
    pub km: u32,
    /// Distance covered in this segment in meters (≈1000 for interior splits,
    /// under 1000 for a final partial split)
    pub distance: f64,
    /// Segment duration as `MM:SS`
    pub time: String,
    /// Per-kilometer pace for this segment as `MM:SS`
    pub pace: String,
    /// Meters climbed within this segment
    pub elevation_gain: f64,
}

/// Generate kilometer splits for a track.
///
/// The sum of all split distances equals the track's total distance (same
/// pairwise haversine accumulation, same order). A sparse track whose single
/// segment jumps past a boundary closes one split carrying the whole segment
/// rather than emitting zero-distance filler splits; its distance can then
/// exceed 1000 m.
///
/// Returns an empty vec for tracks with fewer than 2 samples.
///
/// # Example
/// ```
/// use route_stats::{build_splits, GpsCoordinate};
///
/// // ~1 km north in 5 minutes, then another ~330 m
/// let track = vec![
///     GpsCoordinate::new(0.0, 0.0, 5.0, 0),
///     GpsCoordinate::new(0.009, 0.0, 5.0, 300_000),
///     GpsCoordinate::new(0.012, 0.0, 5.0, 400_000),
/// ];
/// let splits = build_splits(&track);
/// assert_eq!(splits.len(), 2);
/// assert_eq!(splits[0].km, 1);
/// assert!(splits[1].distance < 1000.0);
/// ```
pub fn build_splits(coordinates: &[GpsCoordinate]) -> Vec<Split> {
    if coordinates.len() < 2 {
        return Vec::new();
    }

    let mut splits = Vec::new();
    let mut cumulative = 0.0;
    let mut boundary_distance = 0.0;
    let mut boundary_time = coordinates[0].timestamp;
    let mut segment_gain = 0.0;
    let mut next_boundary = SPLIT_DISTANCE_METERS;

    for pair in coordinates.windows(2) {
        cumulative += haversine_distance(&pair[0], &pair[1]);

        if let (Some(a1), Some(a2)) = (pair[0].altitude, pair[1].altitude) {
            let delta = a2 - a1;
            if delta > 0.0 {
                segment_gain += delta;
            }
        }

        if cumulative + BOUNDARY_EPSILON >= next_boundary {
            let distance = cumulative - boundary_distance;
            let secs = elapsed_secs(boundary_time, pair[1].timestamp);

            splits.push(Split {
                km: splits.len() as u32 + 1,
                distance,
                time: format_min_sec(secs),
                pace: format_pace(secs, distance),
                elevation_gain: segment_gain,
            });

            boundary_distance = cumulative;
            boundary_time = pair[1].timestamp;
            segment_gain = 0.0;
            // One split per crossing sample: a long segment that jumps past
            // several boundaries advances straight to the next unreached one.
            next_boundary = ((cumulative + BOUNDARY_EPSILON) / SPLIT_DISTANCE_METERS).floor()
                * SPLIT_DISTANCE_METERS
                + SPLIT_DISTANCE_METERS;
        }
    }

    // Final partial split for whatever distance is left past the last boundary
    let leftover = cumulative - boundary_distance;
    if leftover > BOUNDARY_EPSILON {
        let last = &coordinates[coordinates.len() - 1];
        let secs = elapsed_secs(boundary_time, last.timestamp);
        splits.push(Split {
            km: splits.len() as u32 + 1,
            distance: leftover,
            time: format_min_sec(secs),
            pace: format_pace(secs, leftover),
            elevation_gain: segment_gain,
        });
    }

    splits
}
