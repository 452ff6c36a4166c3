pub mod feature_encoder;
pub mod historical_estimator;
pub mod traffic_classifier;

// Re-export the items used by the advisor
pub use feature_encoder::{encode, ClassifierSchema, FeatureVector};
pub use historical_estimator::{
    estimate, estimate_with_tier, EstimateTier, HistoricalData, VehicleEstimate,
};
pub use traffic_classifier::{classify_or_fallback, ClassPrediction, LogisticModel, TrafficClassifier};
