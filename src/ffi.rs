//! FFI bindings for mobile platforms (iOS/Android).
//!
//! UniFFI bindings that expose route analysis to Kotlin and Swift. All FFI
//! functions are prefixed with `ffi_` to avoid naming conflicts with the
//! internal API. Wrappers filter invalid samples before analysis so the host
//! can forward raw capture buffers directly.

use log::{debug, info};

use crate::{
    analyze_route, filter_valid, init_logging, ActivityType, Bounds, GpsCoordinate, RouteStats,
};

/// Analyze a tracked workout and return its stats.
///
/// Invalid samples (bad fix, non-positive accuracy) are dropped before
/// analysis; degenerate input yields zeroed stats rather than an error.
#[uniffi::export]
pub fn ffi_analyze_route(
    coordinates: Vec<GpsCoordinate>,
    start_time: i64,
    end_time: i64,
    body_weight_kg: f64,
    activity: ActivityType,
) -> RouteStats {
    init_logging();

    let clean = filter_valid(&coordinates);
    let dropped = coordinates.len() - clean.len();
    if dropped > 0 {
        debug!(
            "[RouteStatsRust] Dropped {} invalid samples of {}",
            dropped,
            coordinates.len()
        );
    }

    let stats = analyze_route(&clean, start_time, end_time, body_weight_kg, activity);
    info!(
        "[RouteStatsRust] Analyzed {} samples: {:.0}m, pace {}, {} splits",
        clean.len(),
        stats.total_distance,
        stats.average_pace,
        stats.splits.len()
    );
    stats
}

/// Same analysis, serialized to JSON for hosts that render from a JSON blob.
#[uniffi::export]
pub fn ffi_analyze_route_json(
    coordinates: Vec<GpsCoordinate>,
    start_time: i64,
    end_time: i64,
    body_weight_kg: f64,
    activity: ActivityType,
) -> String {
    let stats = ffi_analyze_route(coordinates, start_time, end_time, body_weight_kg, activity);
    serde_json::to_string(&stats).unwrap_or_else(|_| "{}".to_string())
}

/// Bounding box for the route's map viewport, or `None` for an empty track.
#[uniffi::export]
pub fn ffi_route_bounds(coordinates: Vec<GpsCoordinate>) -> Option<Bounds> {
    init_logging();
    let bounds = Bounds::from_coordinates(&filter_valid(&coordinates));
    debug!(
        "[RouteStatsRust] Bounds for {} samples: {:?}",
        coordinates.len(),
        bounds
    );
    bounds
}

/// Drop samples without a usable fix, preserving order.
#[uniffi::export]
pub fn ffi_filter_valid(coordinates: Vec<GpsCoordinate>) -> Vec<GpsCoordinate> {
    init_logging();
    filter_valid(&coordinates)
}
