pub mod insights;
pub mod recommendation;

pub use insights::{traffic_insights, TrafficInsights, WeatherAdvisory};
pub use recommendation::{build, AdvisorContext, TrafficVerdict};
