//! Traffic estimation and route recommendation.
//!
//! Given historical vehicle counts, a pre-trained binary traffic classifier and
//! the alternative routes returned by a directions provider, the advisor
//! estimates the load at the destination, classifies it as low or high traffic
//! and picks the recommended route.
//!
//! ```no_run
//! use route_advisor::{AdvisorConfig, AdvisorContext, TripQuery, Weather};
//! use route_advisor::data_loader::{load_candidates, load_historical_records, load_logistic_model};
//! use std::path::Path;
//!
//! let records = load_historical_records(Path::new("bangalore_traffic.csv"))?;
//! let model = load_logistic_model(Path::new("traffic_classifier.json"))?;
//! let ctx = AdvisorContext::with_schema(records, model.schema()?, AdvisorConfig::default());
//!
//! let candidates = load_candidates(Path::new("routes.geojson"), 3)?;
//! let trip = TripQuery::new("Brigade Road", "Hebbal", 9, Weather::Clear)?;
//! let rec = ctx.recommend(&trip, &model, &candidates);
//! println!("{:?} ({:.0}%)", rec.traffic_label, rec.confidence * 100.0);
//! # Ok::<(), route_advisor::AdvisorError>(())
//! ```

pub mod advisor;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod flow_analyzer;
pub mod global_variables;
pub mod route_planner;
pub mod shared_data;

pub use advisor::{build, AdvisorContext};
pub use config::AdvisorConfig;
pub use error::{AdvisorError, Result};
pub use flow_analyzer::{ClassPrediction, ClassifierSchema, FeatureVector, TrafficClassifier};
pub use shared_data::{
    AnnotatedRoute, HistoricalRecord, Recommendation, RouteCandidate, RouteColor, TrafficLabel,
    TripQuery, Weather,
};
