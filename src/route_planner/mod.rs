pub mod directions;
pub mod route_comparison;
pub mod route_scorer;

pub use directions::{candidates_from_geojson, Coordinates, DirectionsRequest, LocationGazetteer};
pub use route_comparison::{compare_routes, JourneyClass, PerformanceTier, RouteComparison};
pub use route_scorer::{select_best, RouteSelection};
