//! Advisor configuration parameters

use crate::global_variables::{
    CONFIDENCE_THRESHOLD, DEFAULT_VEHICLE_COUNT, DIRECTIONS_PROFILE, FALLBACK_CONFIDENCE,
    GOOD_ALTERNATIVE_MARGIN_MINUTES, MAX_ALTERNATIVE_ROUTES, MODERATE_JOURNEY_MINUTES,
    QUICK_JOURNEY_MINUTES, ROUTE_SHARE_FACTOR,
};
use serde::{Deserialize, Serialize};

/// Tunable parameters. Every field falls back to its constant in
/// `global_variables` when missing from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Vehicle count returned when no historical record matches (default: 75)
    pub default_vehicle_count: u32,

    /// Confidence reported with the fallback verdict (default: 0.5)
    pub fallback_confidence: f64,

    /// Confidence at or above which a prediction is considered reliable (default: 0.7)
    pub confidence_threshold: f64,

    /// Directions profile requested from the provider (default: "driving-car")
    pub directions_profile: String,

    /// Provider share factor for alternative routes (default: 0.5)
    pub route_share_factor: f64,

    /// Number of alternative routes requested and kept (default: 3)
    pub alternative_route_target_count: usize,

    /// Routes slower than the best by at most this many minutes are
    /// still a good alternative (default: 5.0)
    pub good_alternative_margin_min: f64,

    /// Best routes shorter than this are a quick journey (default: 20.0)
    pub quick_journey_min: f64,

    /// Best routes shorter than this are a moderate journey (default: 45.0)
    pub moderate_journey_min: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            default_vehicle_count: DEFAULT_VEHICLE_COUNT,
            fallback_confidence: FALLBACK_CONFIDENCE,
            confidence_threshold: CONFIDENCE_THRESHOLD,
            directions_profile: DIRECTIONS_PROFILE.to_string(),
            route_share_factor: ROUTE_SHARE_FACTOR,
            alternative_route_target_count: MAX_ALTERNATIVE_ROUTES,
            good_alternative_margin_min: GOOD_ALTERNATIVE_MARGIN_MINUTES,
            quick_journey_min: QUICK_JOURNEY_MINUTES,
            moderate_journey_min: MODERATE_JOURNEY_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: AdvisorConfig =
            serde_json::from_str(r#"{ "alternative_route_target_count": 2 }"#).unwrap();
        assert_eq!(cfg.alternative_route_target_count, 2);
        assert_eq!(cfg.default_vehicle_count, 75);
        assert_eq!(cfg.directions_profile, "driving-car");
        assert_eq!(cfg.confidence_threshold, 0.7);
    }
}
