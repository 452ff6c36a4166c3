// directions.rs
//
// Boundary with the external directions provider. The crate never performs
// the HTTP call itself; it prepares the request body for a trip and turns the
// provider's GeoJSON answer into normalized route candidates.

use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, Result};
use crate::shared_data::RouteCandidate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Provider order is (lon, lat).
    pub fn as_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

/// Known locations and their coordinates.
#[derive(Debug, Clone, Default)]
pub struct LocationGazetteer {
    locations: HashMap<String, Coordinates>,
}

impl LocationGazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, coordinates: Coordinates) {
        self.locations.insert(name.to_string(), coordinates);
    }

    pub fn get(&self, name: &str) -> Option<Coordinates> {
        self.locations.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn resolve(&self, name: &str) -> Result<Coordinates> {
        self.get(name)
            .ok_or_else(|| AdvisorError::UnknownLocation(name.to_string()))
    }

    /// Point halfway between two known locations, for centering a map.
    pub fn midpoint(&self, origin: &str, destination: &str) -> Result<Coordinates> {
        let a = self.resolve(origin)?;
        let b = self.resolve(destination)?;
        Ok(Coordinates::new((a.lat + b.lat) / 2.0, (a.lon + b.lon) / 2.0))
    }
}

impl FromIterator<(String, Coordinates)> for LocationGazetteer {
    fn from_iter<I: IntoIterator<Item = (String, Coordinates)>>(iter: I) -> Self {
        Self {
            locations: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRoutes {
    pub share_factor: f64,
    pub target_count: usize,
}

/// Request body for the provider's directions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionsRequest {
    #[serde(skip)]
    pub profile: String,
    pub coordinates: Vec<[f64; 2]>,
    pub alternative_routes: AlternativeRoutes,
}

impl DirectionsRequest {
    pub fn for_trip(
        gazetteer: &LocationGazetteer,
        origin: &str,
        destination: &str,
        config: &AdvisorConfig,
    ) -> Result<Self> {
        if origin == destination {
            return Err(AdvisorError::InvalidInput(
                "origin and destination must differ".to_string(),
            ));
        }
        let from = gazetteer.resolve(origin)?;
        let to = gazetteer.resolve(destination)?;
        Ok(Self {
            profile: config.directions_profile.clone(),
            coordinates: vec![from.as_lon_lat(), to.as_lon_lat()],
            alternative_routes: AlternativeRoutes {
                share_factor: config.route_share_factor,
                target_count: config.alternative_route_target_count,
            },
        })
    }

    pub fn endpoint_path(&self) -> String {
        format!("/v2/directions/{}/geojson", self.profile)
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    summary: RouteSummary,
}

// The provider omits zero-valued summary fields.
#[derive(Debug, Deserialize)]
struct RouteSummary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

/// Parses a GeoJSON directions response into 1-based candidates in km/min,
/// keeping at most `target_count` routes.
pub fn candidates_from_geojson(body: &str, target_count: usize) -> Result<Vec<RouteCandidate>> {
    let collection: FeatureCollection = serde_json::from_str(body)
        .map_err(|e| AdvisorError::ProviderResponse(e.to_string()))?;

    if collection.features.len() > target_count {
        log::warn!(
            "Provider returned {} routes, keeping the first {}",
            collection.features.len(),
            target_count
        );
    }

    collection
        .features
        .iter()
        .take(target_count)
        .enumerate()
        .map(|(i, feature)| {
            let summary = &feature.properties.summary;
            if !(summary.distance >= 0.0 && summary.duration >= 0.0) {
                return Err(AdvisorError::ProviderResponse(format!(
                    "route {} has invalid summary (distance {}, duration {})",
                    i + 1,
                    summary.distance,
                    summary.duration
                )));
            }
            Ok(RouteCandidate::from_provider_summary(
                i + 1,
                summary.distance,
                summary.duration,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gazetteer() -> LocationGazetteer {
        let mut g = LocationGazetteer::new();
        g.insert("Brigade Road", Coordinates::new(12.9754, 77.6045));
        g.insert("Indiranagar 100 Feet Road", Coordinates::new(12.9784, 77.6392));
        g
    }

    #[test]
    fn request_uses_lon_lat_and_configured_alternatives() {
        let cfg = AdvisorConfig::default();
        let req =
            DirectionsRequest::for_trip(&gazetteer(), "Brigade Road", "Indiranagar 100 Feet Road", &cfg)
                .unwrap();
        assert_eq!(req.coordinates, vec![[77.6045, 12.9754], [77.6392, 12.9784]]);
        assert_eq!(req.alternative_routes.target_count, 3);
        assert_eq!(req.alternative_routes.share_factor, 0.5);
        assert_eq!(req.endpoint_path(), "/v2/directions/driving-car/geojson");

        let body = serde_json::to_value(&req).unwrap();
        assert!(body.get("profile").is_none());
        assert_eq!(body["alternative_routes"]["target_count"], 3);
    }

    #[test]
    fn request_rejects_same_or_unknown_locations() {
        let cfg = AdvisorConfig::default();
        let g = gazetteer();
        assert!(matches!(
            DirectionsRequest::for_trip(&g, "Brigade Road", "Brigade Road", &cfg),
            Err(AdvisorError::InvalidInput(_))
        ));
        assert!(matches!(
            DirectionsRequest::for_trip(&g, "Brigade Road", "Atlantis", &cfg),
            Err(AdvisorError::UnknownLocation(name)) if name == "Atlantis"
        ));
    }

    #[test]
    fn midpoint_averages_coordinates() {
        let m = gazetteer()
            .midpoint("Brigade Road", "Indiranagar 100 Feet Road")
            .unwrap();
        assert!((m.lat - 12.9769).abs() < 1e-9);
        assert!((m.lon - 77.62185).abs() < 1e-9);
    }

    #[test]
    fn geojson_summaries_become_candidates() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": null,
                 "properties": {"summary": {"distance": 4500.0, "duration": 720.0}}},
                {"type": "Feature", "geometry": null,
                 "properties": {"summary": {"distance": 3900.0, "duration": 780.0}}},
                {"type": "Feature", "geometry": null,
                 "properties": {"summary": {}}},
                {"type": "Feature", "geometry": null,
                 "properties": {"summary": {"distance": 1.0, "duration": 1.0}}}
            ]
        }"#;
        let c = candidates_from_geojson(body, 3).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c[0], RouteCandidate::new(1, 4.5, 12.0));
        assert_eq!(c[1], RouteCandidate::new(2, 3.9, 13.0));
        assert_eq!(c[2], RouteCandidate::new(3, 0.0, 0.0));
    }

    #[test]
    fn malformed_geojson_is_a_provider_error() {
        assert!(matches!(
            candidates_from_geojson("{\"features\": 3}", 3),
            Err(AdvisorError::ProviderResponse(_))
        ));
        let negative = r#"{"features": [{"properties": {"summary": {"distance": -1.0, "duration": 5.0}}}]}"#;
        assert!(candidates_from_geojson(negative, 3).is_err());
    }
}
