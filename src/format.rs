//! Time and pace formatting for the display boundary.
//!
//! The host app's summary card and split table consume pre-formatted `MM:SS`
//! strings. Internals stay numeric (seconds, meters); formatting only happens
//! here, at the edge.
//!
//! Rounding rule: durations are rounded half-up to the nearest whole second
//! before formatting, so `299.5` seconds renders as `"5:00"`. Degenerate rates
//! (zero distance or zero time) render as the `"0:00"` sentinel.

/// Format a duration in seconds as `MM:SS`.
///
/// Seconds are rounded half-up to the nearest whole second; minutes are not
/// zero-padded (`"5:00"`, `"12:07"`). Negative or non-finite input clamps to
/// `"0:00"`.
///
/// # Example
/// ```
/// use route_stats::format_min_sec;
/// assert_eq!(format_min_sec(300.0), "5:00");
/// assert_eq!(format_min_sec(367.2), "6:07");
/// ```
pub fn format_min_sec(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total = (seconds + 0.5).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a pace as `MM:SS` per kilometer given elapsed seconds and covered
/// meters. Returns the `"0:00"` sentinel when either quantity is degenerate.
///
/// # Example
/// ```
/// use route_stats::format_pace;
/// assert_eq!(format_pace(300.0, 1000.0), "5:00"); // 1 km in 5 minutes
/// assert_eq!(format_pace(0.0, 0.0), "0:00");
/// ```
pub fn format_pace(seconds: f64, meters: f64) -> String {
    if !seconds.is_finite() || !meters.is_finite() || seconds <= 0.0 || meters <= 0.0 {
        return "0:00".to_string();
    }

    format_min_sec(seconds / (meters / 1000.0))
}

/// Elapsed seconds between two epoch-millisecond timestamps, clamped to zero
/// so a misbehaving clock can never produce a negative duration.
pub(crate) fn elapsed_secs(from_ms: i64, to_ms: i64) -> f64 {
    ((to_ms - from_ms) as f64 / 1000.0).max(0.0)
}
