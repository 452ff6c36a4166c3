// recommendation.rs
//
// Composition of the traffic verdict and the route selection into one
// Recommendation. Building a recommendation never fails: each stage absorbs
// its own faults into a default (historical default count, fallback verdict,
// empty route list) and the assembler only enforces the call order.

use crate::config::AdvisorConfig;
use crate::error::Result;
use crate::flow_analyzer::feature_encoder::{self, ClassifierSchema};
use crate::flow_analyzer::historical_estimator::{self, HistoricalData, VehicleEstimate};
use crate::flow_analyzer::traffic_classifier::{
    classify_or_fallback, ClassPrediction, TrafficClassifier,
};
use crate::global_variables::DEFAULT_VEHICLE_COUNT;
use crate::route_planner::route_scorer::{select_best, RouteSelection};
use crate::shared_data::{HistoricalRecord, Recommendation, RouteCandidate, TripQuery, Weather};
use serde::{Deserialize, Serialize};

/// Estimated load and classifier verdict for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficVerdict {
    pub estimate: VehicleEstimate,
    pub prediction: ClassPrediction,
}

/// Session-wide, read-only inputs: historical records, the classifier schema
/// and configuration. Built once by the caller and shared by reference (or
/// `Arc`) between concurrent builds.
#[derive(Debug, Clone)]
pub struct AdvisorContext {
    history: HistoricalData,
    schema: ClassifierSchema,
    config: AdvisorConfig,
}

impl AdvisorContext {
    /// Fails only when the schema is empty.
    pub fn new(
        records: Vec<HistoricalRecord>,
        schema_fields: Vec<String>,
        config: AdvisorConfig,
    ) -> Result<Self> {
        let schema = ClassifierSchema::new(schema_fields)?;
        Ok(Self::with_schema(records, schema, config))
    }

    pub fn with_schema(
        records: Vec<HistoricalRecord>,
        schema: ClassifierSchema,
        config: AdvisorConfig,
    ) -> Self {
        log::info!(
            "Advisor context ready: {} historical records, {} schema fields",
            records.len(),
            schema.len()
        );
        Self {
            history: HistoricalData::new(records),
            schema,
            config,
        }
    }

    pub fn history(&self) -> &HistoricalData {
        &self.history
    }

    pub fn schema(&self) -> &ClassifierSchema {
        &self.schema
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn traffic_verdict(
        &self,
        destination: &str,
        hour: u8,
        weather: Weather,
        classifier: &dyn TrafficClassifier,
    ) -> TrafficVerdict {
        let estimate = self.history.estimate_for(
            destination,
            hour,
            weather,
            self.config.default_vehicle_count,
        );
        let features = self
            .schema
            .encode(hour, estimate.vehicle_count, weather, destination);
        let prediction =
            classify_or_fallback(classifier, &features, self.config.fallback_confidence);
        TrafficVerdict {
            estimate,
            prediction,
        }
    }

    pub fn recommend(
        &self,
        trip: &TripQuery,
        classifier: &dyn TrafficClassifier,
        candidates: &[RouteCandidate],
    ) -> Recommendation {
        let verdict = self.traffic_verdict(&trip.destination, trip.hour, trip.weather, classifier);
        let selection = select_best(candidates);
        merge(verdict, selection)
    }
}

/// Builds a recommendation from loose inputs. `location_pair` is
/// (origin, destination); traffic is estimated at the destination. An empty
/// schema degrades to the fallback verdict instead of failing.
pub fn build(
    location_pair: (&str, &str),
    hour: u8,
    weather: Weather,
    records: &[HistoricalRecord],
    schema_fields: &[String],
    classifier: &dyn TrafficClassifier,
    candidates: &[RouteCandidate],
) -> Recommendation {
    let (_, destination) = location_pair;

    let estimate = historical_estimator::estimate_with_tier(
        destination,
        hour,
        weather,
        records,
        DEFAULT_VEHICLE_COUNT,
    );
    let prediction =
        match feature_encoder::encode(schema_fields, hour, estimate.vehicle_count, weather, destination) {
            Ok(features) => {
                classify_or_fallback(classifier, &features, ClassPrediction::fallback().confidence)
            }
            Err(e) => {
                log::error!("Cannot encode features: {}; using fallback verdict", e);
                ClassPrediction::fallback()
            }
        };
    let selection = select_best(candidates);

    merge(
        TrafficVerdict {
            estimate,
            prediction,
        },
        selection,
    )
}

fn merge(verdict: TrafficVerdict, selection: RouteSelection) -> Recommendation {
    Recommendation {
        traffic_label: verdict.prediction.label,
        confidence: verdict.prediction.confidence,
        vehicle_count_estimate: verdict.estimate.vehicle_count,
        best_route_index: selection.best_route_index,
        routes: selection.routes,
    }
}
