//! # Route Stats
//!
//! GPS route analysis for workout tracking.
//!
//! This library is the computational core behind a GPS-tracked workout feature:
//! it converts a snapshot of timestamped GPS samples into distance, pace,
//! elevation, speed, calorie and per-kilometer split statistics. Capture,
//! permissions, persistence and display all live in the host app; this crate is
//! a pure, synchronous pipeline over an in-memory coordinate list.
//!
//! ## Features
//!
//! - **`ffi`** - Enable FFI bindings for mobile platforms (iOS/Android)
//!
//! ## Quick Start
//!
//! ```rust
//! use route_stats::{analyze_route, ActivityType, GpsCoordinate};
//!
//! // Two samples five minutes apart, heading north
//! let track = vec![
//!     GpsCoordinate::new(51.5074, -0.1278, 5.0, 0),
//!     GpsCoordinate::new(51.5164, -0.1278, 5.0, 300_000),
//! ];
//!
//! let stats = analyze_route(&track, 0, 300_000, 70.0, ActivityType::Running);
//! println!(
//!     "{:.0} m in {} ({} splits)",
//!     stats.total_distance,
//!     stats.average_pace,
//!     stats.splits.len()
//! );
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, RouteStatsError};

// Geographic utilities (haversine distance, track length, unit conversions)
pub mod geo_utils;
pub use geo_utils::{haversine_distance, mps_to_kmh, track_distance};

// Time and pace formatting (MM:SS strings for the display boundary)
pub mod format;
pub use format::{format_min_sec, format_pace};

// Route analysis pipeline (distance, elevation, speed, pace aggregation)
pub mod analyzer;
pub use analyzer::{analyze_route, ElevationProfile, RouteStats};

// Kilometer-aligned split generation
pub mod splits;
pub use splits::{build_splits, Split, SPLIT_DISTANCE_METERS};

// MET-based calorie estimation
pub mod calories;
pub use calories::{estimate_calories, CalorieConfig};

// Caller-side input validation helpers
pub mod validate;
pub use validate::{filter_valid, validate_track};

// FFI bindings for mobile platforms (iOS/Android)
#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
pub(crate) fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("RouteStatsRust"),
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
pub(crate) fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// One GPS sample captured during a workout session.
///
/// Timestamps are Unix epoch milliseconds (the host app's clock) and must be
/// non-decreasing within a session. Optional fields use `Option` rather than a
/// numeric sentinel: an absent altitude means "no elevation data for this
/// point", never zero.
///
/// # Example
/// ```
/// use route_stats::GpsCoordinate;
/// let sample = GpsCoordinate::new(51.5074, -0.1278, 8.0, 1_700_000_000_000);
/// assert!(sample.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GpsCoordinate {
    /// Latitude in degrees (-90..90)
    pub latitude: f64,
    /// Longitude in degrees (-180..180)
    pub longitude: f64,
    /// Altitude in meters, when the device reports one
    pub altitude: Option<f64>,
    /// Horizontal accuracy in meters (must be > 0 for a valid fix)
    pub accuracy: f64,
    /// Unix epoch milliseconds
    pub timestamp: i64,
    /// Device-reported instantaneous speed in m/s, when available
    pub speed: Option<f64>,
}

impl GpsCoordinate {
    /// Create a sample without altitude or device speed.
    pub fn new(latitude: f64, longitude: f64, accuracy: f64, timestamp: i64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
            accuracy,
            timestamp,
            speed: None,
        }
    }

    /// Attach a device-reported altitude (meters).
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    /// Attach a device-reported speed (m/s).
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Check if the sample has a usable fix: finite in-range coordinates and
    /// positive horizontal accuracy.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
            && self.accuracy > 0.0
    }
}

/// Workout mode for a GPS-tracked session.
///
/// Drives the MET coefficient used for calorie estimation (see
/// [`CalorieConfig`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum ActivityType {
    Running,
    Walking,
    Cycling,
    Hiking,
}

/// Bounding box for a track (map viewport for the route display).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from GPS samples. Returns `None` for an empty track.
    pub fn from_coordinates(coordinates: &[GpsCoordinate]) -> Option<Self> {
        if coordinates.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for c in coordinates {
            min_lat = min_lat.min(c.latitude);
            max_lat = max_lat.max(c.latitude);
            min_lng = min_lng.min(c.longitude);
            max_lng = max_lng.max(c.longitude);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// Get the center point of the bounds as (latitude, longitude).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
