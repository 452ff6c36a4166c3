// insights.rs
//
// Presentation-neutral advisory values derived from a Recommendation.

use crate::config::AdvisorConfig;
use crate::global_variables::{HIGH_TRAFFIC_LEVEL, LOW_TRAFFIC_LEVEL};
use crate::shared_data::{Recommendation, TrafficLabel, Weather};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherAdvisory {
    /// Smooth driving conditions.
    Smooth,
    DriveCarefully,
    Moderate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficInsights {
    pub status: String,
    /// Gauge value on a 0-100 scale.
    pub traffic_level: u8,
    pub weather_advisory: WeatherAdvisory,
    /// Whether the confidence reaches the configured threshold.
    pub is_confident: bool,
}

pub fn traffic_level(label: TrafficLabel) -> u8 {
    match label {
        TrafficLabel::Low => LOW_TRAFFIC_LEVEL,
        TrafficLabel::High => HIGH_TRAFFIC_LEVEL,
    }
}

pub fn weather_advisory(weather: Weather) -> WeatherAdvisory {
    match weather {
        Weather::Clear => WeatherAdvisory::Smooth,
        Weather::Rainy => WeatherAdvisory::DriveCarefully,
        Weather::Cloudy | Weather::Foggy => WeatherAdvisory::Moderate,
    }
}

pub fn traffic_insights(
    recommendation: &Recommendation,
    weather: Weather,
    config: &AdvisorConfig,
) -> TrafficInsights {
    TrafficInsights {
        status: recommendation.traffic_label.display_name().to_string(),
        traffic_level: traffic_level(recommendation.traffic_label),
        weather_advisory: weather_advisory(weather),
        is_confident: recommendation.confidence >= config.confidence_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(label: TrafficLabel, confidence: f64) -> Recommendation {
        Recommendation {
            traffic_label: label,
            confidence,
            vehicle_count_estimate: 75,
            best_route_index: None,
            routes: Vec::new(),
        }
    }

    #[test]
    fn gauge_and_status_follow_label() {
        let cfg = AdvisorConfig::default();
        let low = traffic_insights(&recommendation(TrafficLabel::Low, 0.9), Weather::Clear, &cfg);
        assert_eq!(low.traffic_level, 30);
        assert_eq!(low.status, "Low Traffic");
        assert!(low.is_confident);

        let high = traffic_insights(&recommendation(TrafficLabel::High, 0.5), Weather::Rainy, &cfg);
        assert_eq!(high.traffic_level, 80);
        assert!(!high.is_confident);
        assert_eq!(high.weather_advisory, WeatherAdvisory::DriveCarefully);
    }

    #[test]
    fn confidence_threshold_is_inclusive() {
        let cfg = AdvisorConfig::default();
        let r = traffic_insights(&recommendation(TrafficLabel::Low, 0.7), Weather::Foggy, &cfg);
        assert!(r.is_confident);
        assert_eq!(r.weather_advisory, WeatherAdvisory::Moderate);
    }
}
