//! Unified error handling for the route-stats library.
//!
//! The analyzer itself is total over its input domain and never returns an
//! error; these types are produced by the caller-side validation helpers in
//! [`crate::validate`], which the GPS capture layer runs before handing a
//! track to the analyzer.

use std::fmt;

/// Unified error type for route-stats operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteStatsError {
    /// Track has insufficient points for processing
    InsufficientPoints {
        point_count: usize,
        minimum_required: usize,
    },
    /// A sample has invalid GPS data (out-of-range lat/lng, non-positive accuracy)
    InvalidCoordinate { index: usize, message: String },
    /// Sample timestamps go backwards at the given index
    NonMonotonicTimestamps { index: usize },
}

impl fmt::Display for RouteStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteStatsError::InsufficientPoints {
                point_count,
                minimum_required,
            } => {
                write!(
                    f,
                    "Track has {} points, minimum {} required",
                    point_count, minimum_required
                )
            }
            RouteStatsError::InvalidCoordinate { index, message } => {
                write!(f, "Invalid coordinate at index {}: {}", index, message)
            }
            RouteStatsError::NonMonotonicTimestamps { index } => {
                write!(f, "Timestamp goes backwards at index {}", index)
            }
        }
    }
}

impl std::error::Error for RouteStatsError {}

/// Result type alias for route-stats operations.
pub type Result<T> = std::result::Result<T, RouteStatsError>;
