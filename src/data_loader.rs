// data_loader.rs
//
// File-backed inputs for the composition root: the historical traffic table,
// the location gazetteer, the classifier model and the optional config file.

use crate::config::AdvisorConfig;
use crate::error::Result;
use crate::flow_analyzer::traffic_classifier::LogisticModel;
use crate::route_planner::directions::{candidates_from_geojson, Coordinates, LocationGazetteer};
use crate::shared_data::{HistoricalRecord, RouteCandidate};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct GazetteerRow {
    #[serde(rename = "LOCATION")]
    location: String,
    #[serde(rename = "LAT")]
    lat: f64,
    #[serde(rename = "LON")]
    lon: f64,
}

/// Reads `LOCATION,TIME,WEATHER,VEHICLE_COUNT` rows. Rows that fail to
/// deserialize are skipped with a warning.
pub fn read_historical_records<R: Read>(reader: R) -> Result<Vec<HistoricalRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (row, result) in rdr.deserialize::<HistoricalRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                log::warn!("Skipping historical row {}: {}", row + 1, e);
            }
        }
    }
    if skipped > 0 {
        log::warn!("Skipped {} malformed historical row(s)", skipped);
    }
    log::info!("Loaded traffic data with {} records", records.len());
    Ok(records)
}

pub fn load_historical_records(path: &Path) -> Result<Vec<HistoricalRecord>> {
    let file = File::open(path)?;
    read_historical_records(file)
}

/// Reads `LOCATION,LAT,LON` rows.
pub fn read_gazetteer<R: Read>(reader: R) -> Result<LocationGazetteer> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut gazetteer = LocationGazetteer::new();
    for result in rdr.deserialize() {
        let row: GazetteerRow = result?;
        gazetteer.insert(&row.location, Coordinates::new(row.lat, row.lon));
    }
    log::info!("Loaded {} location coordinates", gazetteer.len());
    Ok(gazetteer)
}

pub fn load_gazetteer(path: &Path) -> Result<LocationGazetteer> {
    read_gazetteer(File::open(path)?)
}

pub fn load_logistic_model(path: &Path) -> Result<LogisticModel> {
    let model: LogisticModel = serde_json::from_str(&fs::read_to_string(path)?)?;
    model.validate()?;
    log::info!(
        "Classifier model loaded with {} input fields",
        model.feature_names.len()
    );
    Ok(model)
}

/// Defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AdvisorConfig> {
    match path {
        Some(p) => Ok(serde_json::from_str(&fs::read_to_string(p)?)?),
        None => Ok(AdvisorConfig::default()),
    }
}

pub fn load_candidates(path: &Path, target_count: usize) -> Result<Vec<RouteCandidate>> {
    candidates_from_geojson(&fs::read_to_string(path)?, target_count)
}
