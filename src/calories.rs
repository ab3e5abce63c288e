//! MET-based calorie estimation.
//!
//! Energy expenditure is estimated as `MET × body weight (kg) × duration (h)`,
//! the standard metabolic-equivalent formula. MET coefficients come from the
//! 2011 Compendium of Physical Activities (Ainsworth et al.): running at a
//! recreational ~6 mph pace, brisk walking, general bicycling, and
//! cross-country hiking. The table is a configuration surface: hosts that
//! calibrate against heart-rate data can supply their own coefficient via
//! [`CalorieConfig::with_met`]. Treat the output as an estimate, not a
//! measurement.

use serde::{Deserialize, Serialize};

use crate::ActivityType;

/// Configuration for calorie estimation: the MET coefficient to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieConfig {
    /// Metabolic equivalent of task (kcal per kg per hour)
    pub met: f64,
}

impl CalorieConfig {
    /// Compendium MET value for a workout mode.
    pub fn for_activity(activity: ActivityType) -> Self {
        let met = match activity {
            // Compendium 2011 code 12030: running, 6 mph (10 min/mile)
            ActivityType::Running => 9.8,
            // Code 17200: walking, 2.8-3.2 mph, moderate pace
            ActivityType::Walking => 3.5,
            // Code 01015: bicycling, general
            ActivityType::Cycling => 7.5,
            // Code 17080: hiking, cross country
            ActivityType::Hiking => 6.0,
        };
        Self { met }
    }

    /// Use a custom MET coefficient.
    pub fn with_met(met: f64) -> Self {
        Self { met }
    }
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self::for_activity(ActivityType::Running)
    }
}

/// Estimate kilocalories burned over a session.
///
/// `MET × weight × hours`, rounded and clamped to a non-negative integer.
/// Degenerate input (non-positive weight or duration, non-finite values)
/// yields 0 rather than an error: a missing profile weight should never
/// break saving a workout.
///
/// # Example
/// ```
/// use route_stats::{estimate_calories, ActivityType, CalorieConfig};
///
/// let config = CalorieConfig::for_activity(ActivityType::Running);
/// // 70 kg runner for 30 minutes: 9.8 * 70 * 0.5 = 343 kcal
/// assert_eq!(estimate_calories(&config, 70.0, 1800.0), 343);
/// ```
pub fn estimate_calories(config: &CalorieConfig, body_weight_kg: f64, duration_secs: f64) -> u32 {
    if !body_weight_kg.is_finite()
        || !duration_secs.is_finite()
        || !config.met.is_finite()
        || body_weight_kg <= 0.0
        || duration_secs <= 0.0
        || config.met <= 0.0
    {
        return 0;
    }

    let hours = duration_secs / 3600.0;
    (config.met * body_weight_kg * hours).round().max(0.0) as u32
}
