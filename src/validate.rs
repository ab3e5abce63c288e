//! Caller-side input validation.
//!
//! Validating samples is the GPS capture layer's job, not the analyzer's:
//! [`crate::analyze_route`] assumes its input is already clean and only
//! defends against degenerate sequences. The capture layer runs these helpers
//! on each fix (or once on the full snapshot) before handing the track over.

use crate::error::{Result, RouteStatsError};
use crate::GpsCoordinate;

/// Minimum samples for a track to be analyzable at all.
pub const MIN_TRACK_POINTS: usize = 2;

/// Drop samples without a usable fix (out-of-range coordinates, non-positive
/// accuracy). Order is preserved.
pub fn filter_valid(coordinates: &[GpsCoordinate]) -> Vec<GpsCoordinate> {
    coordinates.iter().filter(|c| c.is_valid()).copied().collect()
}

/// Check that a snapshot honors the analyzer's input contract: at least two
/// samples, every sample valid, timestamps non-decreasing.
///
/// Returns the first violation found.
pub fn validate_track(coordinates: &[GpsCoordinate]) -> Result<()> {
    if coordinates.len() < MIN_TRACK_POINTS {
        return Err(RouteStatsError::InsufficientPoints {
            point_count: coordinates.len(),
            minimum_required: MIN_TRACK_POINTS,
        });
    }

    for (index, c) in coordinates.iter().enumerate() {
        if !c.is_valid() {
            let message = if !c.latitude.is_finite() || c.latitude < -90.0 || c.latitude > 90.0 {
                format!("latitude {} out of range", c.latitude)
            } else if !c.longitude.is_finite() || c.longitude < -180.0 || c.longitude > 180.0 {
                format!("longitude {} out of range", c.longitude)
            } else {
                format!("accuracy {} is not positive", c.accuracy)
            };
            return Err(RouteStatsError::InvalidCoordinate { index, message });
        }
    }

    for (i, pair) in coordinates.windows(2).enumerate() {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(RouteStatsError::NonMonotonicTimestamps { index: i + 1 });
        }
    }

    Ok(())
}
