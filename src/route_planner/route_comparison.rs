// route_comparison.rs
//
// Side-by-side metrics for the annotated routes, relative to the recommended
// one: average speed, how much slower/longer each alternative is, and what the
// recommendation saves compared with the worst alternative.

use crate::config::AdvisorConfig;
use crate::shared_data::AnnotatedRoute;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceTier {
    Fastest,
    GoodAlternative,
    SlowerOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JourneyClass {
    Quick,
    Moderate,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub index: usize,
    /// `None` for a zero-duration route.
    pub average_speed_kmh: Option<f64>,
    /// Minutes slower than the recommended route (0 for the recommended one).
    pub time_delta_min: f64,
    /// Kilometres longer than the recommended route (0 for the recommended one).
    pub distance_delta_km: f64,
    pub tier: PerformanceTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    pub routes: Vec<RouteMetrics>,
    /// Slowest duration minus the recommended duration; only with 2+ routes.
    pub time_saved_min: Option<f64>,
    /// Longest distance minus the recommended distance; only with 2+ routes.
    pub distance_saved_km: Option<f64>,
    pub journey: Option<JourneyClass>,
}

pub fn average_speed_kmh(distance_km: f64, duration_min: f64) -> Option<f64> {
    if duration_min > 0.0 {
        Some(distance_km / (duration_min / 60.0))
    } else {
        None
    }
}

pub fn journey_class(duration_min: f64, config: &AdvisorConfig) -> JourneyClass {
    if duration_min < config.quick_journey_min {
        JourneyClass::Quick
    } else if duration_min < config.moderate_journey_min {
        JourneyClass::Moderate
    } else {
        JourneyClass::Long
    }
}

/// Compares `routes` against the one flagged `is_best`. Without a flagged
/// route there is nothing to compare and the result is empty.
pub fn compare_routes(routes: &[AnnotatedRoute], config: &AdvisorConfig) -> RouteComparison {
    let Some(best) = routes.iter().find(|r| r.is_best) else {
        return RouteComparison {
            routes: Vec::new(),
            time_saved_min: None,
            distance_saved_km: None,
            journey: None,
        };
    };

    let metrics = routes
        .iter()
        .map(|r| {
            let (time_delta_min, distance_delta_km) = if r.is_best {
                (0.0, 0.0)
            } else {
                (r.duration_min - best.duration_min, r.distance_km - best.distance_km)
            };
            let tier = if r.is_best {
                PerformanceTier::Fastest
            } else if time_delta_min <= config.good_alternative_margin_min {
                PerformanceTier::GoodAlternative
            } else {
                PerformanceTier::SlowerOption
            };
            RouteMetrics {
                index: r.index,
                average_speed_kmh: average_speed_kmh(r.distance_km, r.duration_min),
                time_delta_min,
                distance_delta_km,
                tier,
            }
        })
        .collect();

    let (time_saved_min, distance_saved_km) = if routes.len() > 1 {
        let slowest = routes
            .iter()
            .map(|r| r.duration_min)
            .fold(f64::NEG_INFINITY, f64::max);
        let longest = routes
            .iter()
            .map(|r| r.distance_km)
            .fold(f64::NEG_INFINITY, f64::max);
        (
            Some(slowest - best.duration_min),
            Some(longest - best.distance_km),
        )
    } else {
        (None, None)
    };

    RouteComparison {
        routes: metrics,
        time_saved_min,
        distance_saved_km,
        journey: Some(journey_class(best.duration_min, config)),
    }
}
